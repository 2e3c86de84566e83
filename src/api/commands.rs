use serde::{Deserialize, Serialize};

use crate::domain::{Dealer, PlayerId};
use crate::engine::{Action, Table};
use crate::eval::HandEvaluator;

use super::dto::CommandResponse;
use super::errors::ApiError;

/// Команды, которые меняют стол.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TableCommand {
    /// Действие активного игрока.
    Act(Action),

    /// Начать новую раздачу вручную (после `Broken` или паузы на итогах).
    NewRound,

    /// Посадить игрока за стол.
    AddPlayer {
        player_id: PlayerId,
        #[serde(default)]
        defaulting: bool,
    },

    /// Докупка до бай-ина.
    BuyPlayerIn { player_id: PlayerId },

    /// Включить/выключить автофолд игрока.
    SetPlayerDefaulting { player_id: PlayerId, defaulting: bool },

    /// Убрать игрока из-за стола.
    RemovePlayer { player_id: PlayerId },
}

impl TableCommand {
    /// Разобрать команду из JSON.
    pub fn from_json(raw: &str) -> Result<Self, ApiError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Выполнить команду над столом.
pub fn execute<D: Dealer, E: HandEvaluator>(
    table: &mut Table<D, E>,
    cmd: TableCommand,
) -> Result<CommandResponse, ApiError> {
    match cmd {
        TableCommand::Act(action) => {
            let state = table.act(action)?;
            Ok(CommandResponse::TableState(Box::new(state)))
        }
        TableCommand::NewRound => Ok(CommandResponse::TableState(Box::new(table.new_round()))),
        TableCommand::AddPlayer {
            player_id,
            defaulting,
        } => {
            let seat = table.add_player(player_id, defaulting)?;
            Ok(CommandResponse::PlayerSeated { seat })
        }
        TableCommand::BuyPlayerIn { player_id } => {
            table.buy_player_in(&player_id)?;
            Ok(CommandResponse::Ok)
        }
        TableCommand::SetPlayerDefaulting {
            player_id,
            defaulting,
        } => {
            table.set_player_defaulting(&player_id, defaulting)?;
            Ok(CommandResponse::Ok)
        }
        TableCommand::RemovePlayer { player_id } => {
            let player = table.remove_player(&player_id)?;
            Ok(CommandResponse::PlayerRemoved(player))
        }
    }
}
