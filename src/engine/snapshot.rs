//! Display projection of a game.
//!
//! A [`GameSnapshot`] is produced after every transition. It is the only view
//! of a game the presentation layer gets; the live array stays inside the engine.

use serde::Serialize;

use super::state::{GameState, Move, Score, Segment};

/// Everything the presentation layer needs to draw one step of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub state: GameState,
    /// Values the user has sent left in the active partition
    pub left: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivot: Option<i64>,
    /// Values the user has sent right in the active partition
    pub right: Vec<i64>,
    /// Segment being partitioned, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<Segment>,
    /// Next value to classify
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<i64>,
    pub prompt: String,
    pub feedback: String,
    /// Classification scored by the call that produced this snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_move: Option<Move>,
    pub score: Score,
    /// Live array, only once finished
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_array: Option<Vec<i64>>,
    /// Canonical sorted order, only once finished
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_key: Option<Vec<i64>>,
}

impl GameSnapshot {
    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn left_text(&self) -> String {
        format_list(&self.left)
    }

    pub fn right_text(&self) -> String {
        format_list(&self.right)
    }

    pub fn pivot_text(&self) -> String {
        self.pivot.map(|p| p.to_string()).unwrap_or_default()
    }

    /// Final array text, empty until the game is finished.
    pub fn final_array_text(&self) -> String {
        self.final_array
            .as_deref()
            .map(format_list)
            .unwrap_or_default()
    }

    pub fn answer_key_text(&self) -> String {
        self.answer_key
            .as_deref()
            .map(format_list)
            .unwrap_or_default()
    }
}

/// Format values as `[1, 2, 3]`.
pub fn format_list(values: &[i64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_list() {
        assert_eq!(format_list(&[]), "[]");
        assert_eq!(format_list(&[7]), "[7]");
        assert_eq!(format_list(&[1, -2, 3]), "[1, -2, 3]");
    }

    #[test]
    fn test_text_accessors_before_finish() {
        let snap = GameSnapshot {
            state: GameState::AwaitingClassification,
            left: vec![2],
            pivot: Some(3),
            right: vec![],
            segment: Some(Segment::new(0, 2)),
            current: Some(9),
            prompt: "Pivot = 3. Where does 9 belong?".into(),
            feedback: String::new(),
            last_move: None,
            score: Score::default(),
            final_array: None,
            answer_key: None,
        };
        assert_eq!(snap.left_text(), "[2]");
        assert_eq!(snap.right_text(), "[]");
        assert_eq!(snap.pivot_text(), "3");
        assert_eq!(snap.final_array_text(), "");
        assert!(!snap.is_finished());
    }

    #[test]
    fn test_json_omits_absent_fields() {
        let snap = GameSnapshot {
            state: GameState::Finished,
            left: vec![],
            pivot: None,
            right: vec![],
            segment: None,
            current: None,
            prompt: String::new(),
            feedback: String::new(),
            last_move: None,
            score: Score { correct: 2, total: 3 },
            final_array: Some(vec![1, 2]),
            answer_key: Some(vec![1, 2]),
        };
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["state"], "finished");
        assert!(json.get("pivot").is_none());
        assert_eq!(json["score"]["correct"], 2);
        assert_eq!(json["final_array"], serde_json::json!([1, 2]));
    }
}
