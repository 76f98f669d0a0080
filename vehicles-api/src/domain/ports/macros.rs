//! `define_port_error!`, the declaration macro for driven-port error enums.
//!
//! Adapters only ever report a diagnostic string, so every variant is
//! generated with a single documented `message` field. A variant is declared
//! as `Name => "display prefix"` and renders as `"<prefix>: <message>"`.
//! The macro also emits a snake-case constructor for each variant and a
//! `kind()` accessor used as the `error_kind` log field.

macro_rules! define_port_error {
    (
        $(#[$enum_meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $prefix:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error("{prefix}: {message}", prefix = $prefix)]
                $variant {
                    /// Diagnostic reported by the adapter.
                    message: String,
                },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = concat!(
                        "Build `", stringify!($name), "::", stringify!($variant), "`."
                    )]
                    #[must_use]
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant {
                            message: message.into(),
                        }
                    }
                }
            )+

            /// Variant name as a static string.
            #[must_use]
            pub const fn kind(&self) -> &'static str {
                match self {
                    $( Self::$variant { .. } => stringify!($variant), )+
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        /// Sample port error.
        pub enum SamplePortError {
            /// First failure.
            Broken => "sample broken",
            /// Multi-word variant.
            TimedOut => "sample timed out",
        }
    }

    #[test]
    fn display_joins_prefix_and_message() {
        assert_eq!(
            SamplePortError::broken("disk").to_string(),
            "sample broken: disk"
        );
    }

    #[test]
    fn constructors_are_snake_case_and_accept_owned_strings() {
        let error = SamplePortError::timed_out(String::from("after 2s"));
        assert_eq!(
            error,
            SamplePortError::TimedOut {
                message: "after 2s".to_owned()
            }
        );
    }

    #[test]
    fn kind_is_the_variant_name() {
        assert_eq!(SamplePortError::broken("x").kind(), "Broken");
        assert_eq!(SamplePortError::timed_out("x").kind(), "TimedOut");
    }
}
