//! Macros for declaring typed state and event identifiers.

/// Generate a State trait implementation for a simple enum.
///
/// The enum gets the derives the machine needs (`Clone`, `Eq`, `Hash`,
/// `Debug`, serde) and each variant is named after itself.
///
/// # Example
///
/// ```
/// use rewind::core::State;
/// use rewind::state_enum;
///
/// state_enum! {
///     pub enum Player {
///         Stopped,
///         Playing,
///         Paused,
///     }
/// }
///
/// assert_eq!(Player::Paused.name(), "Paused");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate an Event trait implementation for a simple enum.
///
/// # Example
///
/// ```
/// use rewind::core::Event;
/// use rewind::event_enum;
///
/// event_enum! {
///     pub enum PlayerEvent {
///         Play,
///         Pause,
///         Stop,
///     }
/// }
///
/// assert_eq!(PlayerEvent::Play.name(), "Play");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Event, State};

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
    }

    event_enum! {
        enum TestEvent {
            Start,
            Finish,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
    }

    #[test]
    fn event_enum_macro_generates_trait() {
        assert_eq!(TestEvent::Start.name(), "Start");
        assert_eq!(TestEvent::Finish.name(), "Finish");
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        assert_ne!(PublicState::A, PublicState::B);
    }

    #[test]
    fn generated_enums_deserialize_from_configuration() {
        let config: crate::config::MachineConfig<TestState, TestEvent> =
            crate::config::MachineConfig::from_json(
                r#"{
                    "initial": "Initial",
                    "states": {
                        "Initial": { "transitions": { "Start": "Processing" } },
                        "Processing": { "transitions": { "Finish": "Complete" } },
                        "Complete": {}
                    }
                }"#,
            )
            .unwrap();

        assert_eq!(config.initial, TestState::Initial);
        assert_eq!(
            config.state_ids().copied().collect::<Vec<_>>(),
            vec![TestState::Initial, TestState::Processing, TestState::Complete]
        );
    }
}
