use crate::config::settings::AvatarSettings;

/// Skin avatar for a player; non-premium accounts get the placeholder skin.
pub fn avatar_url(settings: &AvatarSettings, name: &str, premium: bool) -> String {
    let skin = if premium && !name.trim().is_empty() {
        urlencoding::encode(name.trim()).into_owned()
    } else {
        settings.placeholder.to_string()
    };
    format!("{}/avatar/{}/{}", settings.base_url, skin, settings.size)
}
