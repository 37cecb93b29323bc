//! Text cleanup for chat display and a few lookup tables.

use regex::Regex;
use std::sync::OnceLock;

/// Replacements applied in order by [`fix_characters`].
///
/// Brackets and markdown-significant characters are swapped for look-alikes
/// so titles cannot break the chat platform's formatting.
const REPLACEMENTS: [(&str, &str); 12] = [
    ("&quot;", "\""),
    ("&amp;", "&"),
    ("(", "\u{0028}"),
    (")", "\u{0029}"),
    ("[", "【"),
    ("]", "】"),
    ("  ", " "),
    ("*", "\""),
    ("_", " "),
    ("{", "\u{0028}"),
    ("}", "\u{0029}"),
    ("`", "'"),
];

const PERMISSION_LABELS: [(&str, &str); 32] = [
    ("create_instant_invite", "Criar convite instantâneo"),
    ("kick_members", "Expulsar membros"),
    ("ban_members", "Banir membros"),
    ("administrator", "Administrador"),
    ("manage_channels", "Gerenciar canais"),
    ("manage_guild", "Gerenciar servidor"),
    ("add_reactions", "Adicionar reações"),
    ("view_audit_log", "Ver o registro de auditoria"),
    ("priority_speaker", "Voz prioritária"),
    ("stream", "Transmitir em canais de voz"),
    ("read_messages", "Ler mensagens"),
    ("send_messages", "Enviar mensagens"),
    ("send_tts_messages", "Enviar mensagens em TTS"),
    ("manage_messages", "Gerenciar mensagens"),
    ("embed_links", "Inserir links"),
    ("attach_files", "Anexar arquivos"),
    ("read_message_history", "Ver histórico de mensagens"),
    ("mention_everyone", "Mencionar todos"),
    ("external_emojis", "Usar emojis externos"),
    ("view_guild_insights", "Ver informação do servidor"),
    ("connect", "Conectar"),
    ("speak", "Falar"),
    ("mute_members", "Silenciar membros"),
    ("deafen_members", "Ensurdecer membros"),
    ("move_members", "Mover membros"),
    ("use_voice_activation", "Usar detecção de voz"),
    ("change_nickname", "Mudar apelido"),
    ("manage_nicknames", "Gerenciar apelidos"),
    ("manage_roles", "Gerenciar cargos"),
    ("manage_webhooks", "Gerenciar webhooks"),
    ("manage_emojis", "Gerenciar emojis"),
    ("use_slash_commands", "Usar comandos de barra"),
];

fn url_regex() -> &'static Regex {
    static URL: OnceLock<Regex> = OnceLock::new();
    URL.get_or_init(|| Regex::new(r"^https?://(?:www\.)?.+").unwrap())
}

fn youtube_regex() -> &'static Regex {
    static YOUTUBE: OnceLock<Regex> = OnceLock::new();
    YOUTUBE.get_or_init(|| {
        Regex::new(r"^(https?://)?(www\.)?youtube\.(com|nl)/watch\?v=([-\w]+)").unwrap()
    })
}

/// Apply the display replacement table, then cut to `limit` characters.
///
/// A `limit` of 0 disables truncation. Truncated text ends with `"..."`.
///
/// ```rust
/// use queue_search::text::fix_characters;
///
/// assert_eq!(fix_characters("[Live] *Encore*", 0), "【Live】 \"Encore\"");
/// assert_eq!(fix_characters("abcdef", 3), "abc...");
/// ```
pub fn fix_characters(text: &str, limit: usize) -> String {
    let mut fixed = text.to_string();
    for (from, to) in REPLACEMENTS {
        fixed = fixed.replace(from, to);
    }

    if limit > 0 && fixed.chars().count() > limit {
        format!("{}...", truncate_chars(&fixed, limit))
    } else {
        fixed
    }
}

/// First `max` characters of `text`, never splitting a character.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Whether `text` starts with an http(s) URL.
pub fn is_url(text: &str) -> bool {
    url_regex().is_match(text)
}

/// Video id of a YouTube watch URL, if `text` starts with one.
pub fn youtube_video_id(text: &str) -> Option<&str> {
    youtube_regex()
        .captures(text)
        .and_then(|caps| caps.get(4))
        .map(|m| m.as_str())
}

/// Portuguese label for a chat platform permission name.
pub fn permission_label(name: &str) -> Option<&'static str> {
    PERMISSION_LABELS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, label)| *label)
}
