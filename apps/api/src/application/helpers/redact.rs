const PREVIEW_CHARS: usize = 10;

/// First characters of a secret, for log lines.
pub fn secret_preview(secret: &str) -> String {
    let head: String = secret.chars().take(PREVIEW_CHARS).collect();
    format!("{head}...")
}
