//! The JSON request envelope callers send to render a card.
//!
//! ```json
//! { "cardType": "erg_summary", "format": "9:16",
//!   "workoutData": { ... }, "options": { "showName": false } }
//! ```
//!
//! `workoutData` carries whatever the card type lays out: a workout, a
//! regatta result, a season recap or a leaderboard.

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::{CardConfig, CardData, CardOptions, CardType, Error, Format, Result};

/// Format used when the request does not name one.
pub const DEFAULT_FORMAT: &str = "1:1";

/// Raw, unvalidated request body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardRequest {
    #[serde(alias = "card_type")]
    pub card_type: Option<String>,
    pub format: Option<String>,
    #[serde(alias = "workout_data")]
    pub workout_data: Option<Value>,
    pub options: Option<CardOptions>,
}

/// A request whose selectors resolved and whose payload decoded.
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub config: CardConfig,
    pub data: CardData,
}

impl CardRequest {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Resolve card type and format and decode the payload for that type.
    pub fn validate(self) -> Result<ValidatedRequest> {
        let card_type = match self.card_type.as_deref().map(str::trim) {
            None | Some("") => return Err(Error::InvalidRequest("missing cardType".into())),
            Some(name) => name.parse::<CardType>()?,
        };
        let format = self
            .format
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .unwrap_or(DEFAULT_FORMAT)
            .parse::<Format>()?;

        let data = match self.workout_data {
            Some(value @ Value::Object(_)) => value,
            Some(_) => {
                return Err(Error::InvalidRequest(
                    "workoutData must be an object".into(),
                ))
            }
            None => return Err(Error::InvalidRequest("missing workoutData".into())),
        };
        let data = CardData::decode(card_type, data)
            .map_err(|e| Error::InvalidRequest(format!("workoutData: {e}")))?;

        debug!(
            "validated {} request for {} with {} rows",
            card_type.key(),
            format.key(),
            data.row_count()
        );
        Ok(ValidatedRequest {
            config: CardConfig {
                format,
                card_type,
                options: self.options.unwrap_or_default(),
                ..Default::default()
            },
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(body: &str) -> Result<ValidatedRequest> {
        CardRequest::from_json(body)?.validate()
    }

    #[test]
    fn minimal_request_uses_defaults() {
        let v = validate(r#"{"cardType":"erg_summary","workoutData":{}}"#).unwrap();
        assert_eq!(v.config.format, Format::Square);
        assert_eq!(v.config.card_type, CardType::ErgSummary);
        assert!(v.config.options.show_attribution);
        assert!(v.config.options.show_name);
        assert!(matches!(v.data, CardData::Erg(ref r) if r.splits.is_empty()));
    }

    #[test]
    fn payload_follows_the_card_type() {
        let v = validate(
            r#"{"cardType":"team_leaderboard","format":"9:16",
                "workoutData":{"team_name":"Varsity Men","entries":[{"rank":1,"athlete_name":"Chen"}]}}"#,
        )
        .unwrap();
        assert_eq!(v.config.card_type, CardType::TeamLeaderboard);
        let CardData::TeamLeaderboard(board) = v.data else {
            panic!("leaderboard payload");
        };
        assert_eq!(board.entries.len(), 1);

        let err = validate(r#"{"cardType":"season_recap","workoutData":{"improvements":{}}}"#)
            .unwrap_err();
        assert!(err.is_invalid_request());
    }

    #[test]
    fn options_and_story_format() {
        let v = validate(
            r##"{"cardType":"erg_summary_alt","format":"9:16",
                "workoutData":{"distanceM":2000},
                "options":{"showName":false,"teamColor":"#003366"}}"##,
        )
        .unwrap();
        assert_eq!(v.config.format, Format::Story);
        assert!(!v.config.options.show_name);
        assert!(v.config.options.show_attribution);
        assert_eq!(v.config.options.team_color.as_deref(), Some("#003366"));
    }

    #[test]
    fn rejections_are_invalid_requests() {
        let cases = [
            r#"{"workoutData":{}}"#,
            r#"{"cardType":"  ","workoutData":{}}"#,
            r#"{"cardType":"poster","workoutData":{}}"#,
            r#"{"cardType":"erg_summary","format":"4:5","workoutData":{}}"#,
            r#"{"cardType":"erg_summary","workoutData":[1,2]}"#,
            r#"{"cardType":"erg_summary"}"#,
            r#"{"cardType":"erg_summary","workoutData":{"splits":"many"}}"#,
            r#"not json"#,
        ];
        for body in cases {
            let err = validate(body).expect_err(body);
            assert!(err.is_invalid_request(), "{body}: {err}");
        }
    }

    #[test]
    fn unsupported_format_is_named() {
        let err = validate(r#"{"cardType":"erg_summary","format":"4:5","workoutData":{}}"#)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(ref f) if f == "4:5"));
    }
}
