use crate::error::EngineError;
use crate::garden::state::Viewport;

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Physics step rate in Hz
    pub tick_rate: u32,
    /// Observer notification rate in Hz (bounded by `tick_rate`)
    pub notify_rate: u32,
    /// Cap on a single measured frame delta in milliseconds. Keeps the
    /// integrator stable after the host was backgrounded or stalled.
    pub max_frame_delta_ms: f64,
    /// Viewport used when the rendering surface cannot be measured
    pub fallback_viewport: Viewport,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            notify_rate: 30,
            max_frame_delta_ms: 100.0,
            fallback_viewport: Viewport::default(),
        }
    }
}

impl EngineConfig {
    /// Load config from environment or use defaults
    pub fn load_or_default() -> Self {
        let mut config = Self::default();

        if let Ok(rate) = std::env::var("GARDEN_TICK_RATE") {
            if let Ok(parsed) = rate.parse::<u32>() {
                if parsed > 0 {
                    config.tick_rate = parsed;
                } else {
                    tracing::warn!("GARDEN_TICK_RATE must be > 0, using default");
                }
            } else {
                tracing::warn!("Invalid GARDEN_TICK_RATE '{}', using default", rate);
            }
        }

        if let Ok(rate) = std::env::var("GARDEN_NOTIFY_RATE") {
            if let Ok(parsed) = rate.parse::<u32>() {
                if parsed > 0 {
                    config.notify_rate = parsed;
                } else {
                    tracing::warn!("GARDEN_NOTIFY_RATE must be > 0, using default");
                }
            } else {
                tracing::warn!("Invalid GARDEN_NOTIFY_RATE '{}', using default", rate);
            }
        }

        if let Ok(cap) = std::env::var("GARDEN_MAX_FRAME_DELTA_MS") {
            if let Ok(parsed) = cap.parse::<f64>() {
                if parsed > 0.0 {
                    config.max_frame_delta_ms = parsed;
                } else {
                    tracing::warn!("GARDEN_MAX_FRAME_DELTA_MS must be > 0, using default");
                }
            } else {
                tracing::warn!("Invalid GARDEN_MAX_FRAME_DELTA_MS '{}', using default", cap);
            }
        }

        if let (Ok(w), Ok(h)) = (
            std::env::var("GARDEN_VIEWPORT_WIDTH"),
            std::env::var("GARDEN_VIEWPORT_HEIGHT"),
        ) {
            match (w.parse::<f32>(), h.parse::<f32>()) {
                (Ok(width), Ok(height)) if width > 0.0 && height > 0.0 => {
                    config.fallback_viewport = Viewport { width, height };
                }
                _ => tracing::warn!("Invalid GARDEN_VIEWPORT dimensions, using default"),
            }
        }

        config
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.tick_rate == 0 {
            return Err(EngineError::InvalidConfig(
                "tick_rate must be at least 1".to_string(),
            ));
        }
        if self.notify_rate == 0 {
            return Err(EngineError::InvalidConfig(
                "notify_rate must be at least 1".to_string(),
            ));
        }
        if self.notify_rate > self.tick_rate {
            return Err(EngineError::InvalidConfig(
                "notify_rate cannot exceed tick_rate".to_string(),
            ));
        }
        if !(self.max_frame_delta_ms > 0.0) {
            return Err(EngineError::InvalidConfig(
                "max_frame_delta_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Physics ticks between observer notifications
    pub fn notify_divisor(&self) -> u64 {
        (self.tick_rate / self.notify_rate).max(1) as u64
    }
}
