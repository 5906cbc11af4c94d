//! Player roster kept in delimited record files.

use crate::records::{Record, RecordError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub surname: String,
    pub score: i32,
}

impl Player {
    pub fn new(name: impl Into<String>, surname: impl Into<String>, score: i32) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            score,
        }
    }

    /// The `name;surname;score` record for this player.
    pub fn to_record(&self) -> Record {
        Record::new(vec![
            self.name.clone(),
            self.surname.clone(),
            self.score.to_string(),
        ])
    }
}

/// Ordered list of players.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerData {
    players: Vec<Player>,
}

impl PlayerData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `player` after every player already present.
    pub fn add(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn to_records(&self) -> Vec<Record> {
        self.players.iter().map(Player::to_record).collect()
    }

    /// Rebuilds a roster from records of exactly three fields.
    ///
    /// The first record with the wrong arity or a non-integer score fails
    /// with [`RecordError::InvalidPlayer`].
    pub fn from_records(records: &[Record]) -> Result<Self, RecordError> {
        let players = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                parse_player(record).map_err(|reason| RecordError::InvalidPlayer {
                    record: index,
                    reason,
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { players })
    }
}

fn parse_player(record: &Record) -> Result<Player, String> {
    let [name, surname, score] = record.fields() else {
        return Err(format!("expected 3 fields, found {}", record.len()));
    };
    let score = score
        .parse()
        .map_err(|e| format!("score {score:?} is not an integer: {e}"))?;
    Ok(Player::new(name.as_str(), surname.as_str(), score))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> PlayerData {
        let mut data = PlayerData::new();
        data.add(Player::new("p1", "s1", 10));
        data.add(Player::new("p2", "s2", 20));
        data
    }

    #[test]
    fn test_to_records_keeps_insertion_order() {
        assert_eq!(
            roster().to_records(),
            vec![Record::from(["p1", "s1", "10"]), Record::from(["p2", "s2", "20"])]
        );
    }

    #[test]
    fn test_from_records() {
        let data = PlayerData::from_records(&roster().to_records()).unwrap();
        assert_eq!(data, roster());

        let negative = PlayerData::from_records(&[Record::from(["a", "b", "-3"])]).unwrap();
        assert_eq!(negative.players()[0].score, -3);
    }

    #[test]
    fn test_from_records_wrong_arity() {
        let records = [Record::from(["p1", "s1", "10"]), Record::from(["p2", "s2"])];

        let err = PlayerData::from_records(&records).unwrap_err();
        assert!(matches!(err, RecordError::InvalidPlayer { record: 1, .. }));
    }

    #[test]
    fn test_from_records_bad_score() {
        let err = PlayerData::from_records(&[Record::from(["p1", "s1", "ten"])]).unwrap_err();

        match err {
            RecordError::InvalidPlayer { record, reason } => {
                assert_eq!(record, 0);
                assert!(reason.contains("\"ten\""));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
