// Application identity
pub const APP_NAME_DEFAULT: &str = "Optivolve Digital";
/// Environment variable that replaces the default display name when set and non-empty.
pub const APP_NAME_ENV: &str = "APP_NAME_OVERRIDE";

// Contact addresses (display order)
pub const EMAIL: &[&str] = &[
    "partnership@optivolvedigital.com",
    "it@optivolvedigital.com",
    "customerservices@optivolvedigital.com",
];
pub const SUPPORT_EMAIL: &str = "soporte@segurocash.com";
pub const ADDRESS: &str = "---";

// Legal text
pub const COPYRIGHT: &str = "© 2025 Optivolve Digital. All rights reserved.";
pub const FOOTER_COPYRIGHT: &str = "© 2023, All Rights Reserved";

// Footer branding
pub const FOOTER_BRAND: &str = "SeguroCash";

// External links
pub const GOOGLE_PLAY_URL: &str =
    "https://play.google.com/store/apps/details?id=com.seguro.cash.rapido&hl=en-gb&gl=ng";
