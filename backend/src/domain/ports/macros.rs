//! `define_port_error!` builds the error enum a driven port reports.
//!
//! Every variant carries the adapter's description of the failure in a
//! `message` field. The macro derives `thiserror::Error` with the given
//! format string and adds, per variant, a snake_case constructor accepting
//! anything convertible into `String`. A shared `message()` accessor returns
//! the description whichever variant holds it.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $display:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($display)]
                $variant { message: String },
            )+
        }

        ::paste::paste! {
            impl $name {
                $(
                    #[doc = "Build a `" $variant "` failure from the adapter's description."]
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant { message: message.into() }
                    }
                )+

                /// Description supplied by the adapter that raised the failure.
                pub fn message(&self) -> &str {
                    match self {
                        $(Self::$variant { message })|+ => message,
                    }
                }
            }
        }
    };
}

pub(crate) use define_port_error;
