/// Keys of the persisted site settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    SiteToken,
    SiteId,
    SiteSecret,
    ApiUrl,
    RegisteredDomain,
    DebugMode,
    FromAddress,
    DomainNoticeDismissed,
    NeedsRegistration,
}

impl SettingKey {
    /// Storage name of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::SiteToken => "nanopost_site_token",
            SettingKey::SiteId => "nanopost_site_id",
            SettingKey::SiteSecret => "nanopost_site_secret",
            SettingKey::ApiUrl => "nanopost_api_url",
            SettingKey::RegisteredDomain => "nanopost_registered_domain",
            SettingKey::DebugMode => "nanopost_debug_mode",
            SettingKey::FromAddress => "nanopost_from_address",
            SettingKey::DomainNoticeDismissed => "nanopost_domain_notice_dismissed",
            SettingKey::NeedsRegistration => "nanopost_needs_registration",
        }
    }
}
