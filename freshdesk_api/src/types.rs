//! Integer-coded properties used by tickets, agents and alerts.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::errors::FreshdeskError;

/// Declares an enum whose variants map to Freshdesk integer codes.
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident = $code:literal => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant = $code),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The integer Freshdesk uses for this value.
            pub fn code(self) -> i64 {
                self as i64
            }

            /// Upper-case name, as shown in error messages.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Accepts either a JSON integer or a numeric string.
            pub fn from_value(value: &Value) -> Result<Self, FreshdeskError> {
                code_from_value(value)
                    .ok_or_else(|| {
                        FreshdeskError::Validation(format!(
                            "Invalid value for {}: {}",
                            stringify!($name),
                            value
                        ))
                    })
                    .and_then(Self::try_from)
            }

            /// Comma separated labels of every variant.
            pub fn labels() -> String {
                Self::ALL
                    .iter()
                    .map(|v| v.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }

        impl TryFrom<i64> for $name {
            type Error = FreshdeskError;

            fn try_from(code: i64) -> Result<Self, FreshdeskError> {
                match code {
                    $($code => Ok($name::$variant),)+
                    other => Err(FreshdeskError::Validation(format!(
                        "Invalid value for {}: {}",
                        stringify!($name),
                        other
                    ))),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_i64(self.code())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.label())
            }
        }
    };
}

coded_enum! {
    /// Channel through which a ticket was raised.
    TicketSource {
        Email = 1 => "EMAIL",
        Portal = 2 => "PORTAL",
        Phone = 3 => "PHONE",
        Chat = 7 => "CHAT",
        FeedbackWidget = 9 => "FEEDBACK_WIDGET",
        OutboundEmail = 10 => "OUTBOUND_EMAIL",
    }
}

coded_enum! {
    TicketStatus {
        Open = 2 => "OPEN",
        Pending = 3 => "PENDING",
        Resolved = 4 => "RESOLVED",
        Closed = 5 => "CLOSED",
    }
}

coded_enum! {
    TicketPriority {
        Low = 1 => "LOW",
        Medium = 2 => "MEDIUM",
        High = 3 => "HIGH",
        Urgent = 4 => "URGENT",
    }
}

coded_enum! {
    /// Which tickets an agent can see.
    AgentTicketScope {
        GlobalAccess = 1 => "GLOBAL_ACCESS",
        GroupAccess = 2 => "GROUP_ACCESS",
        RestrictedAccess = 3 => "RESTRICTED_ACCESS",
    }
}

coded_enum! {
    AlertSeverity {
        Ok = 51 => "OK",
        Warning = 101 => "WARNING",
        Error = 151 => "ERROR",
        Critical = 201 => "CRITICAL",
    }
}

coded_enum! {
    AlertState {
        Open = 1 => "OPEN",
        Resolved = 2 => "RESOLVED",
        Reopen = 3 => "REOPEN",
    }
}

/// Time a ticket may stay unassigned before the group escalates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnassignedFor {
    #[default]
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "2h")]
    TwoHours,
    #[serde(rename = "4h")]
    FourHours,
    #[serde(rename = "8h")]
    EightHours,
    #[serde(rename = "12h")]
    TwelveHours,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "2d")]
    TwoDays,
    #[serde(rename = "3d")]
    ThreeDays,
}

/// Reads an integer code from a JSON number or numeric string.
pub fn code_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ticket_source_codes() {
        assert_eq!(TicketSource::Chat.code(), 7);
        assert_eq!(TicketSource::try_from(10).unwrap(), TicketSource::OutboundEmail);
        assert!(TicketSource::try_from(4).is_err());
    }

    #[test]
    fn test_from_value_accepts_numeric_strings() {
        assert_eq!(
            TicketStatus::from_value(&json!("5")).unwrap(),
            TicketStatus::Closed
        );
        assert_eq!(
            TicketPriority::from_value(&json!(4)).unwrap(),
            TicketPriority::Urgent
        );
        assert!(TicketPriority::from_value(&json!("urgent")).is_err());
        assert!(TicketPriority::from_value(&json!(null)).is_err());
    }

    #[test]
    fn test_serializes_as_integer() {
        let value = serde_json::to_value(AlertSeverity::Critical).unwrap();
        assert_eq!(value, json!(201));
    }

    #[test]
    fn test_agent_scope_labels() {
        assert_eq!(
            AgentTicketScope::labels(),
            "GLOBAL_ACCESS, GROUP_ACCESS, RESTRICTED_ACCESS"
        );
    }

    #[test]
    fn test_unassigned_for_round_trips_freshdesk_strings() {
        assert_eq!(serde_json::to_value(UnassignedFor::default()).unwrap(), json!("30m"));
        let parsed: UnassignedFor = serde_json::from_value(json!("12h")).unwrap();
        assert_eq!(parsed, UnassignedFor::TwelveHours);
        assert!(serde_json::from_value::<UnassignedFor>(json!("5m")).is_err());
    }
}
