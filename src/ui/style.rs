//! Feature detection for host style properties.
//!
//! The host UI may only support vendor-prefixed names for some style
//! properties. Detection runs once, when [`StyleSupport`] is constructed,
//! and the resolved names travel with whatever component needs them.
//! There is no process-wide cache.

/// Candidate property names for CSS transforms, probed in order.
pub const TRANSFORM_PROPS: [&str; 2] = ["transform", "WebkitTransform"];

/// Candidate property names for text-selection control, probed in order.
pub const SELECT_PROPS: [&str; 4] = [
    "userSelect",
    "MozUserSelect",
    "WebkitUserSelect",
    "msUserSelect",
];

/// What the host's style object recognizes.
pub trait HostCapabilities {
    /// Whether the host supports a style property of this name.
    fn supports(&self, prop: &str) -> bool;
}

/// A host supporting the unprefixed standard properties.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardHost;

impl HostCapabilities for StandardHost {
    fn supports(&self, prop: &str) -> bool {
        matches!(prop, "transform" | "userSelect")
    }
}

/// Style property names resolved against a host, first supported wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSupport {
    transform_prop: Option<&'static str>,
    select_prop: Option<&'static str>,
}

impl StyleSupport {
    /// Resolves the supported property names against the given host.
    pub fn detect(host: &dyn HostCapabilities) -> Self {
        Self {
            transform_prop: first_supported(&TRANSFORM_PROPS, host),
            select_prop: first_supported(&SELECT_PROPS, host),
        }
    }

    /// The resolved transform property name, if the host supports one.
    pub fn transform_prop(&self) -> Option<&'static str> {
        self.transform_prop
    }

    /// The resolved user-select property name, if the host supports one.
    pub fn select_prop(&self) -> Option<&'static str> {
        self.select_prop
    }
}

impl Default for StyleSupport {
    fn default() -> Self {
        Self::detect(&StandardHost)
    }
}

fn first_supported(
    props: &[&'static str],
    host: &dyn HostCapabilities,
) -> Option<&'static str> {
    props.iter().find(|prop| host.supports(prop)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PrefixedHost;

    impl HostCapabilities for PrefixedHost {
        fn supports(&self, prop: &str) -> bool {
            matches!(prop, "WebkitTransform" | "WebkitUserSelect" | "msUserSelect")
        }
    }

    struct BareHost;

    impl HostCapabilities for BareHost {
        fn supports(&self, _prop: &str) -> bool {
            false
        }
    }

    #[test]
    fn test_standard_host_detection() {
        let support = StyleSupport::detect(&StandardHost);
        assert_eq!(support.transform_prop(), Some("transform"));
        assert_eq!(support.select_prop(), Some("userSelect"));
    }

    #[test]
    fn test_prefixed_host_takes_first_supported() {
        let support = StyleSupport::detect(&PrefixedHost);
        assert_eq!(support.transform_prop(), Some("WebkitTransform"));
        // WebkitUserSelect precedes msUserSelect in probe order
        assert_eq!(support.select_prop(), Some("WebkitUserSelect"));
    }

    #[test]
    fn test_unsupporting_host_resolves_to_none() {
        let support = StyleSupport::detect(&BareHost);
        assert_eq!(support.transform_prop(), None);
        assert_eq!(support.select_prop(), None);
    }
}
