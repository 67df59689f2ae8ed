//! Membership access code shown on the summary step.
//!
//! The code is derived from `{userId, membershipTier, memberSince}`. It is a
//! mock credential: a deterministic grid pattern plus a short hex code.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Rendered size of the code in pixels.
pub const CODE_SIZE: usize = 200;
/// Size of one grid cell in pixels.
pub const CELL_SIZE: usize = 8;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AccessPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    membership_tier: Option<&'a str>,
    member_since: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessCode {
    payload: String,
    short_code: String,
    cells: Vec<Vec<bool>>,
}

impl AccessCode {
    pub fn generate(
        user_id: Option<&str>,
        membership_tier: Option<&str>,
        issued_at: DateTime<Utc>,
    ) -> Self {
        let payload = AccessPayload {
            user_id,
            membership_tier,
            member_since: issued_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        // Serializing a struct of strings cannot fail.
        let payload = serde_json::to_string(&payload).unwrap_or_default();

        let digest = Sha256::digest(payload.as_bytes());
        let hex = hex::encode_upper(&digest[..6]);
        let short_code = format!("{}-{}-{}", &hex[0..4], &hex[4..8], &hex[8..12]);

        let cells = Self::pattern(&payload);

        Self {
            payload,
            short_code,
            cells,
        }
    }

    fn pattern(data: &str) -> Vec<Vec<bool>> {
        let count = CODE_SIZE / CELL_SIZE;
        let hash: usize = data.chars().map(|c| c as usize).sum();
        (0..count)
            .map(|i| {
                (0..count)
                    .map(|j| (hash + i * count + j) % 3 == 0)
                    .collect()
            })
            .collect()
    }

    /// JSON payload the code encodes.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Human-readable code, e.g. `3FA2-09BC-11D4`.
    pub fn short_code(&self) -> &str {
        &self.short_code
    }

    pub fn cells(&self) -> &[Vec<bool>] {
        &self.cells
    }

    /// Text rendering of the grid, two characters per cell.
    pub fn render_text(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|filled| if *filled { "██" } else { "  " })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
