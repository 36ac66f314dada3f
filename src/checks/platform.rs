//! Operating system identification.
//!
//! Identifiers follow Python's `platform.system().lower()` so reports read
//! the same as the interpreter would describe the host: macOS is `darwin`.

/// Identifier of the platform this binary was built for.
pub fn current_platform_id() -> String {
    match std::env::consts::OS {
        "macos" => "darwin".to_string(),
        other => other.to_string(),
    }
}

/// Human label used in the platform-specific check, or None if unknown.
pub fn platform_label(id: &str) -> Option<&'static str> {
    match id.to_lowercase().as_str() {
        "darwin" => Some("macOS"),
        "linux" => Some("Linux"),
        "windows" => Some("Windows"),
        _ => None,
    }
}

/// System name as shown in the banner (`Darwin`, `Linux`, `Windows`, ...).
pub fn system_name(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Machine architecture as shown in the banner.
pub fn current_machine() -> &'static str {
    match (std::env::consts::OS, std::env::consts::ARCH) {
        ("macos", "aarch64") => "arm64",
        ("windows", "x86_64") => "AMD64",
        (_, arch) => arch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(platform_label("darwin"), Some("macOS"));
        assert_eq!(platform_label("Linux"), Some("Linux"));
        assert_eq!(platform_label("WINDOWS"), Some("Windows"));
        assert_eq!(platform_label("freebsd"), None);
        assert_eq!(platform_label("macos"), None);
        assert_eq!(platform_label(""), None);
    }

    #[test]
    fn system_name_capitalizes() {
        assert_eq!(system_name("darwin"), "Darwin");
        assert_eq!(system_name("freebsd"), "Freebsd");
        assert_eq!(system_name(""), "");
    }

    #[test]
    fn current_platform_uses_python_naming() {
        let id = current_platform_id();
        assert_ne!(id, "macos");
        assert!(!id.is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_host_is_known() {
        assert_eq!(current_platform_id(), "linux");
        assert_eq!(platform_label(&current_platform_id()), Some("Linux"));
    }
}
