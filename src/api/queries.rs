use serde::{Deserialize, Serialize};

use crate::domain::{Dealer, PlayerId};
use crate::engine::Table;
use crate::eval::HandEvaluator;

use super::dto::QueryResponse;

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Полный снэпшот стола (со всеми карманными картами).
    State,

    /// Снэпшот глазами игрока: чужие карты скрыты.
    StateFor { viewer: PlayerId },

    /// Что может сделать активный игрок.
    LegalActions,

    /// Все сидящие игроки.
    Seats,
}

/// Ответить на запрос. Стол не меняется.
pub fn answer<D: Dealer, E: HandEvaluator>(table: &Table<D, E>, query: &Query) -> QueryResponse {
    match query {
        Query::State => QueryResponse::Table(Box::new(table.state())),
        Query::StateFor { viewer } => {
            QueryResponse::Table(Box::new(table.state().redacted_for(viewer)))
        }
        Query::LegalActions => QueryResponse::LegalActions(table.legal_actions()),
        Query::Seats => QueryResponse::Seats(table.seats()),
    }
}
