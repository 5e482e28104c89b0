//! Delivery shapes for asynchronous results.

use serde::{Deserialize, Serialize};

/// How a load result is handed back to the caller.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Completion callback invoked once from a background task.
    Callback,
    /// Single-item stream.
    Stream,
    /// Awaited directly.
    #[default]
    Direct,
}

impl DeliveryMode {
    /// Every mode, in comparison order.
    pub const ALL: [Self; 3] = [Self::Callback, Self::Stream, Self::Direct];
}

impl std::fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Callback => write!(f, "callback"),
            Self::Stream => write!(f, "stream"),
            Self::Direct => write!(f, "direct"),
        }
    }
}

/// Assignment of delivery modes across a batch of loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryPlan {
    /// Every load uses the same mode.
    Fixed(DeliveryMode),
    /// Loads rotate through [`DeliveryMode::ALL`].
    Cycle,
}

impl DeliveryPlan {
    /// Returns the mode for the load at `index`.
    #[must_use]
    pub const fn mode_for(&self, index: usize) -> DeliveryMode {
        match self {
            Self::Fixed(mode) => *mode,
            Self::Cycle => DeliveryMode::ALL[index % DeliveryMode::ALL.len()],
        }
    }
}

impl Default for DeliveryPlan {
    fn default() -> Self {
        Self::Fixed(DeliveryMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_direct() {
        assert_eq!(DeliveryMode::default(), DeliveryMode::Direct);
        assert_eq!(DeliveryPlan::default().mode_for(7), DeliveryMode::Direct);
    }

    #[test]
    fn test_cycle_plan_rotates() {
        let plan = DeliveryPlan::Cycle;
        let modes: Vec<_> = (0..4).map(|i| plan.mode_for(i)).collect();
        assert_eq!(
            modes,
            vec![
                DeliveryMode::Callback,
                DeliveryMode::Stream,
                DeliveryMode::Direct,
                DeliveryMode::Callback
            ]
        );
    }

    #[test]
    fn test_mode_serde_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            delivery: DeliveryMode,
        }

        let parsed: Wrapper = toml::from_str(r#"delivery = "stream""#).unwrap();
        assert_eq!(parsed.delivery, DeliveryMode::Stream);
        assert_eq!(DeliveryMode::Callback.to_string(), "callback");
    }
}
