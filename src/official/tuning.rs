//! Personality tweaks for the REST API (`cb_settings_tweak1..3`).

/// Upper bound accepted by the API for every tweak.
pub const MAX_TWEAK: u8 = 100;

/// Optional personality settings, each in `0..=100`.
///
/// Unset tweaks are not sent, leaving the server default in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tweaks {
    wackiness: Option<u8>,
    talkativeness: Option<u8>,
    attentiveness: Option<u8>,
}

fn clamp(value: u32) -> u8 {
    value.min(u32::from(MAX_TWEAK)) as u8
}

impl Tweaks {
    /// Sensible (0) to wacky (100).
    pub fn set_wackiness(&mut self, value: u32) {
        self.wackiness = Some(clamp(value));
    }

    /// Quiet (0) to talkative (100).
    pub fn set_talkativeness(&mut self, value: u32) {
        self.talkativeness = Some(clamp(value));
    }

    /// Self-centred (0) to attentive (100).
    pub fn set_attentiveness(&mut self, value: u32) {
        self.attentiveness = Some(clamp(value));
    }

    pub fn wackiness(&self) -> Option<u8> {
        self.wackiness
    }

    pub fn talkativeness(&self) -> Option<u8> {
        self.talkativeness
    }

    pub fn attentiveness(&self) -> Option<u8> {
        self.attentiveness
    }

    /// Query parameters for the tweaks that are set.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("cb_settings_tweak1", self.wackiness),
            ("cb_settings_tweak2", self.talkativeness),
            ("cb_settings_tweak3", self.attentiveness),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v.to_string())))
        .collect()
    }
}
