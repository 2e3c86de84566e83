use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;

/// Разновидность игры.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Variant {
    #[default]
    TexasHoldem,
    OmahaHi,
}

impl Variant {
    /// Сколько карманных карт получает каждый игрок.
    pub fn hole_cards(self) -> usize {
        match self {
            Variant::TexasHoldem => 2,
            Variant::OmahaHi => 4,
        }
    }
}

/// Тип лимита. Сейчас движок проверяет только минимум (BB),
/// сам лимит хранится для внешнего слоя.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Limit {
    #[default]
    NoLimit,
    PotLimit,
}

/// Стейки стола (SB/BB/ante).
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stakes {
    pub big_blind: Chips,
    pub small_blind: Chips,
    #[serde(default)]
    pub ante: Chips,
}

impl Stakes {
    pub fn new(small_blind: Chips, big_blind: Chips, ante: Chips) -> Self {
        Self {
            big_blind,
            small_blind,
            ante,
        }
    }
}

/// Опции стола: не меняются всё время жизни стола.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableOptions {
    pub buy_in: Chips,
    #[serde(default)]
    pub variant: Variant,
    pub stakes: Stakes,
    #[serde(default)]
    pub limit: Limit,
    /// Стол играет ровно одну раздачу и останавливается.
    #[serde(default)]
    pub one_shot: bool,
}

/// Ошибки конфигурации стола.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Бай-ин должен быть больше нуля")]
    ZeroBuyIn,

    #[error("Большой блайнд должен быть больше нуля")]
    ZeroBigBlind,

    #[error("Малый блайнд ({small}) больше большого ({big})")]
    SmallBlindAboveBigBlind { small: Chips, big: Chips },

    #[error("Некорректный JSON опций стола: {0}")]
    Json(#[from] serde_json::Error),
}

impl TableOptions {
    /// Опции по умолчанию: холдем, no-limit, без анте, не one-shot.
    pub fn new(buy_in: Chips, stakes: Stakes) -> Self {
        Self {
            buy_in,
            variant: Variant::TexasHoldem,
            stakes,
            limit: Limit::NoLimit,
            one_shot: false,
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_limit(mut self, limit: Limit) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_one_shot(mut self, one_shot: bool) -> Self {
        self.one_shot = one_shot;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buy_in.is_zero() {
            return Err(ConfigError::ZeroBuyIn);
        }
        if self.stakes.big_blind.is_zero() {
            return Err(ConfigError::ZeroBigBlind);
        }
        if self.stakes.small_blind > self.stakes.big_blind {
            return Err(ConfigError::SmallBlindAboveBigBlind {
                small: self.stakes.small_blind,
                big: self.stakes.big_blind,
            });
        }
        Ok(())
    }

    /// Разобрать опции из JSON и сразу проверить их.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let options: TableOptions = serde_json::from_str(raw)?;
        options.validate()?;
        Ok(options)
    }
}

/// Статус стола.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TableStatus {
    /// Меньше двух игроков, способных играть. Ждём новых.
    Broken,
    /// Идёт раздача.
    Dealing,
    /// One-shot стол сыграл свою раздачу.
    Done,
}
