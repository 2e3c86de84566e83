use crate::domain::{
    Card, Chips, Dealer, Deck, HandResult, Player, PlayerId, PotAward, Round, Seat, SeatIndex,
    TableOptions, TableStatus,
};
use crate::engine::actions::{Action, ActionKind};
use crate::engine::errors::TableError;
use crate::engine::events::{LogObserver, TableEvent, TableObserver};
use crate::engine::payout::settle_pots;
use crate::engine::positions::{blind_seats, next_seat, next_to_act, rotation_count};
use crate::engine::state::TableState;
use crate::engine::validation::{legal_actions, validate_action};
use crate::eval::{HandEvaluator, VariantEvaluator};

/// Сколько расчётов банка допускается за один вызов `act`/`new_round`.
/// Второй расчёт подряд без решений игроков ставит стол на паузу до `new_round`.
const MAX_SETTLEMENTS_PER_CALL: u8 = 2;

/// Стол: владеет местами, колодой, бордом и состоянием раунда.
///
/// Все операции синхронные и завершаются до возврата. Стол не потокобезопасен:
/// внешний сервис сериализует вызовы сам.
pub struct Table<D: Dealer, E: HandEvaluator> {
    options: TableOptions,
    seats: Vec<Seat>,
    dealer: D,
    evaluator: E,
    observer: Box<dyn TableObserver>,
    deck: Deck,
    board: Vec<Card>,
    /// С какого места искать следующего ходящего.
    cursor: SeatIndex,
    active: Option<SeatIndex>,
    status: TableStatus,
    round: Round,
    button: SeatIndex,
    /// Сколько нужно внести за раздачу, чтобы остаться в игре.
    cost: Chips,
    result: Option<HandResult>,
    settled_in_call: u8,
}

impl<D: Dealer> Table<D, VariantEvaluator> {
    /// Стол с оценщиком, выбранным по разновидности игры из опций.
    pub fn for_variant<I, S>(dealer: D, options: TableOptions, player_ids: I, sitting_out: &[S]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PlayerId> + AsRef<str>,
    {
        let evaluator = VariantEvaluator::for_variant(options.variant);
        Table::new(dealer, evaluator, options, player_ids, sitting_out)
    }
}

impl<D: Dealer, E: HandEvaluator> Table<D, E> {
    /// Создать стол и сразу начать первую раздачу. События пишутся в `log`.
    ///
    /// Игроки из `sitting_out` сидят за столом, но помечены как defaulting.
    pub fn new<I, S>(dealer: D, evaluator: E, options: TableOptions, player_ids: I, sitting_out: &[S]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PlayerId> + AsRef<str>,
    {
        Self::with_observer(dealer, evaluator, Box::new(LogObserver), options, player_ids, sitting_out)
    }

    /// То же, что `new`, но с собственным получателем событий.
    pub fn with_observer<I, S>(
        dealer: D,
        evaluator: E,
        observer: Box<dyn TableObserver>,
        options: TableOptions,
        player_ids: I,
        sitting_out: &[S],
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PlayerId> + AsRef<str>,
    {
        let seats: Vec<Seat> = player_ids
            .into_iter()
            .enumerate()
            .map(|(seat, id)| {
                let mut p = Player::new(id, seat, options.buy_in);
                p.defaulting = sitting_out.iter().any(|s| {
                    let out: &str = s.as_ref();
                    out == p.id
                });
                Seat::Occupied(p)
            })
            .collect();

        let status = if seats.len() < 2 {
            TableStatus::Broken
        } else {
            TableStatus::Dealing
        };

        let mut table = Self {
            options,
            seats,
            dealer,
            evaluator,
            observer,
            deck: Deck::default(),
            board: Vec::new(),
            cursor: 0,
            active: None,
            status,
            round: Round::PreFlop,
            button: 0,
            cost: Chips::ZERO,
            result: None,
            settled_in_call: 0,
        };
        table.setup_round();
        table.drive();
        table
    }

    // ---------------------------------------------------------------------
    // Публичные операции
    // ---------------------------------------------------------------------

    /// Применить действие активного игрока.
    ///
    /// Сначала полная проверка, потом изменения: при ошибке стол не меняется.
    pub fn act(&mut self, action: Action) -> Result<TableState, TableError> {
        let seat = self.active.ok_or(TableError::NoActivePlayer)?;
        let stack = self
            .player(seat)
            .map(|p| p.stack)
            .ok_or(TableError::NoActivePlayer)?;
        validate_action(&action, self.owed_by(seat), stack, self.options.stakes.big_blind)?;

        self.result = None;
        self.settled_in_call = 0;
        self.apply_action(seat, action, false);
        self.drive();
        Ok(self.state())
    }

    pub fn fold(&mut self) -> Result<TableState, TableError> {
        self.act(Action::fold())
    }

    pub fn check(&mut self) -> Result<TableState, TableError> {
        self.act(Action::check())
    }

    pub fn call(&mut self) -> Result<TableState, TableError> {
        self.act(Action::call())
    }

    pub fn bet(&mut self, chips: u64) -> Result<TableState, TableError> {
        self.act(Action::bet(chips))
    }

    pub fn raise(&mut self, chips: u64) -> Result<TableState, TableError> {
        self.act(Action::raise(chips))
    }

    pub fn all_in(&mut self) -> Result<TableState, TableError> {
        self.act(Action::all_in())
    }

    /// Допустимые действия активного игрока (пусто, если никто не ходит).
    pub fn legal_actions(&self) -> Vec<ActionKind> {
        match self.active.and_then(|seat| self.player(seat)) {
            Some(p) => legal_actions(self.owed_by(p.seat), p.stack),
            None => Vec::new(),
        }
    }

    /// Принудительно начать новую раздачу (например, после показа итогов).
    /// Если раздача ещё не рассчитана, внесённые фишки возвращаются в стеки.
    pub fn new_round(&mut self) -> TableState {
        if self.active.is_some() {
            for p in self.players_mut() {
                p.stack += p.committed;
                p.committed = Chips::ZERO;
            }
        }
        self.status = TableStatus::Dealing;
        self.round = Round::PreFlop;
        self.result = None;
        self.settled_in_call = 0;
        self.setup_round();
        self.drive();
        self.state()
    }

    /// Посадить нового игрока: первое свободное место или новое в конце.
    /// Играть он начнёт со следующей раздачи.
    pub fn add_player(&mut self, id: impl Into<PlayerId>, defaulting: bool) -> Result<SeatIndex, TableError> {
        let id = id.into();
        if self.find_seat(&id).is_some() {
            return Err(TableError::PlayerAlreadySeated(id));
        }

        let seat = self
            .seats
            .iter()
            .position(Seat::is_vacant)
            .unwrap_or(self.seats.len());

        let mut p = Player::new(id, seat, self.options.buy_in);
        p.defaulting = defaulting;
        p.sitting_out = true;

        if seat == self.seats.len() {
            self.seats.push(Seat::Occupied(p));
        } else {
            self.seats[seat] = Seat::Occupied(p);
        }
        Ok(seat)
    }

    /// Докупка: стек игрока снова равен бай-ину.
    pub fn buy_player_in(&mut self, id: &str) -> Result<(), TableError> {
        let buy_in = self.options.buy_in;
        let p = self.find_player_mut(id)?;
        p.stack = buy_in;
        Ok(())
    }

    pub fn set_player_defaulting(&mut self, id: &str, defaulting: bool) -> Result<(), TableError> {
        let p = self.find_player_mut(id)?;
        p.defaulting = defaulting;
        Ok(())
    }

    /// Убрать игрока из-за стола. Возвращает игрока вместе с уходящим стеком.
    /// Нельзя уйти посреди раздачи, если игрок в ней участвует или уже внёс фишки.
    pub fn remove_player(&mut self, id: &str) -> Result<Player, TableError> {
        let seat = self
            .find_seat(id)
            .ok_or_else(|| TableError::PlayerNotFound(id.to_string()))?;

        let hand_live = self.active.is_some();
        if let Some(p) = self.player(seat) {
            if hand_live && (p.is_contesting() || !p.committed.is_zero()) {
                return Err(TableError::PlayerInHand(p.id.clone()));
            }
        }

        match std::mem::replace(&mut self.seats[seat], Seat::Vacant) {
            Seat::Occupied(p) => Ok(p),
            Seat::Vacant => Err(TableError::PlayerNotFound(id.to_string())),
        }
    }

    /// Копии всех сидящих игроков.
    pub fn seats(&self) -> Vec<Player> {
        self.players().cloned().collect()
    }

    /// Снэпшот стола. Ничего не меняет.
    pub fn state(&self) -> TableState {
        let blinds = if self.status == TableStatus::Dealing {
            blind_seats(&self.seats, self.button)
        } else {
            None
        };
        let cloned = |seat: Option<SeatIndex>| seat.and_then(|s| self.player(s)).cloned();

        TableState {
            options: self.options.clone(),
            seats: self.seats.clone(),
            cards: self.board.clone(),
            active: cloned(self.active),
            dealer: cloned(Some(self.button)),
            small_blind: cloned(blinds.map(|b| b.small)),
            big_blind: cloned(blinds.map(|b| b.big)),
            status: self.status,
            round: self.round,
            button: self.button,
            cost: self.cost,
            pot: self.pot(),
            owed: self.active.map(|s| self.owed_by(s)).unwrap_or(Chips::ZERO),
            result: self.result.clone(),
        }
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn status(&self) -> TableStatus {
        self.status
    }

    pub fn round(&self) -> Round {
        self.round
    }

    pub fn button(&self) -> SeatIndex {
        self.button
    }

    pub fn active(&self) -> Option<&Player> {
        self.active.and_then(|s| self.player(s))
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }

    pub fn result(&self) -> Option<&HandResult> {
        self.result.as_ref()
    }

    // ---------------------------------------------------------------------
    // Жизненный цикл раунда
    // ---------------------------------------------------------------------

    /// Крутить автоматику, пока кто-то не должен ходить или стол не остановится.
    fn drive(&mut self) {
        loop {
            if self.status != TableStatus::Dealing {
                self.active = None;
                return;
            }

            match next_to_act(&self.seats, self.cursor) {
                Some(seat) => {
                    self.active = Some(seat);
                    self.cursor = seat;

                    let defaulting = self
                        .player(seat)
                        .map(|p| p.defaulting && !p.sitting_out)
                        .unwrap_or(false);
                    if !defaulting {
                        return;
                    }
                    if let Some(p) = self.player_mut(seat) {
                        p.sitting_out = true;
                    }
                    self.apply_action(seat, Action::fold(), true);
                }
                None => {
                    self.active = None;
                    if !self.close_betting_round() {
                        return;
                    }
                }
            }
        }
    }

    /// Круг ставок закрыт: следующая улица или расчёт банка.
    /// `false` – стол остановился и ждёт внешнего вызова.
    fn close_betting_round(&mut self) -> bool {
        if self.contestant_count() <= 1 || self.round == Round::River {
            self.payout();
            self.settled_in_call += 1;

            if self.options.one_shot {
                self.set_status(TableStatus::Done);
                return false;
            }
            if self.settled_in_call >= MAX_SETTLEMENTS_PER_CALL {
                return false;
            }
            self.round = Round::PreFlop;
        } else {
            self.round = self.round.next();
        }
        self.setup_round();
        true
    }

    /// Подготовка очередной улицы.
    fn setup_round(&mut self) {
        for p in self.players_mut() {
            p.acted = false;
        }

        match self.round {
            Round::PreFlop => self.setup_preflop(),
            Round::Flop => {
                let cards = self.deck.pop_multi(3);
                self.reveal(cards);
            }
            Round::Turn | Round::River => {
                let cards: Vec<Card> = self.deck.pop().into_iter().collect();
                self.reveal(cards);
            }
        }
    }

    fn reveal(&mut self, cards: Vec<Card>) {
        self.board.extend(cards);
        self.cursor = self.button;
        self.emit(TableEvent::BoardDealt {
            round: self.round,
            board: self.board.clone(),
        });
    }

    fn setup_preflop(&mut self) {
        for p in self.players_mut() {
            p.sitting_out = p.defaulting || p.stack.is_zero();
            p.reset_for_hand();
        }
        self.board.clear();
        self.cost = Chips::ZERO;

        if rotation_count(&self.seats) < 2 {
            self.set_status(TableStatus::Broken);
            return;
        }
        self.set_status(TableStatus::Dealing);

        let (button, blinds) = match next_seat(&self.seats, self.button)
            .and_then(|b| blind_seats(&self.seats, b).map(|bl| (b, bl)))
        {
            Some(found) => found,
            None => {
                self.set_status(TableStatus::Broken);
                return;
            }
        };
        self.button = button;
        self.emit(TableEvent::HandStarted {
            button,
            small_blind: blinds.small,
            big_blind: blinds.big,
        });

        self.deck = self.dealer.deck();
        let hole_count = self.options.variant.hole_cards();
        let ante = self.options.stakes.ante;
        let mut dealt = Vec::new();
        let mut antes = Vec::new();

        for seat in self.seats.iter_mut() {
            if let Some(p) = seat.player_mut() {
                if p.sitting_out {
                    continue;
                }
                p.hole_cards = self.deck.pop_multi(hole_count);
                dealt.push((p.id.clone(), p.hole_cards.clone()));
                if !ante.is_zero() {
                    let paid = p.contribute(ante);
                    antes.push((p.id.clone(), paid));
                }
            }
        }
        for (player_id, cards) in dealt {
            self.emit(TableEvent::HoleCardsDealt { player_id, cards });
        }

        let small_blind = self.post_blind(blinds.small, self.options.stakes.small_blind);
        let big_blind = self.post_blind(blinds.big, self.options.stakes.big_blind);
        self.emit(TableEvent::BlindsPosted {
            antes,
            small_blind,
            big_blind,
        });

        // Стоимость колла на префлопе: анте + большой блайнд.
        self.cost = ante + self.options.stakes.big_blind;
        self.cursor = blinds.big;
    }

    fn post_blind(&mut self, seat: SeatIndex, amount: Chips) -> (PlayerId, Chips) {
        match self.player_mut(seat) {
            Some(p) => {
                let paid = p.contribute(amount);
                (p.id.clone(), paid)
            }
            None => (PlayerId::new(), Chips::ZERO),
        }
    }

    // ---------------------------------------------------------------------
    // Действия и банк
    // ---------------------------------------------------------------------

    /// Применить уже проверенное действие.
    fn apply_action(&mut self, seat: SeatIndex, action: Action, automatic: bool) {
        let owed = self.owed_by(seat);
        let Some(p) = self.player_mut(seat) else {
            return;
        };

        let reopens = match action.kind {
            ActionKind::Fold => {
                p.folded = true;
                false
            }
            ActionKind::Check => false,
            ActionKind::Call => {
                p.contribute(owed);
                false
            }
            ActionKind::Bet | ActionKind::Raise => {
                p.contribute(owed);
                p.contribute(action.chips);
                true
            }
            ActionKind::AllIn => {
                p.contribute(owed);
                let rest = p.stack;
                p.contribute(rest);
                true
            }
        };

        // Ставка изменилась – все остальные должны ответить заново.
        if reopens {
            for other in self.players_mut() {
                other.acted = false;
            }
        }

        let Some(p) = self.player_mut(seat) else {
            return;
        };
        p.acted = true;
        let committed = p.committed;
        let stack_after = p.stack;
        let player_id = p.id.clone();

        if committed > self.cost {
            self.cost = committed;
        }

        let pot_after = self.pot();
        self.emit(TableEvent::ActionTaken {
            player_id,
            seat,
            action,
            automatic,
            stack_after,
            pot_after,
        });
    }

    /// Расчёт всех потов и начисление выигрышей.
    fn payout(&mut self) {
        let settlements = settle_pots(&self.seats, self.button, &self.board, &self.evaluator);

        let mut winner_seats: Vec<SeatIndex> = Vec::new();
        let mut pots = Vec::with_capacity(settlements.len());
        let mut awarded = Vec::new();

        for settlement in &settlements {
            let mut shares = Vec::with_capacity(settlement.shares.len());
            for &(seat, amount) in &settlement.shares {
                if let Some(p) = self.player_mut(seat) {
                    p.stack += amount;
                    shares.push((p.id.clone(), amount));
                    awarded.push((p.id.clone(), seat, amount));
                }
                if !winner_seats.contains(&seat) {
                    winner_seats.push(seat);
                }
            }
            pots.push(PotAward {
                amount: settlement.pot.amount,
                eligible: settlement.pot.eligible_seats.clone(),
                shares,
            });
        }

        for (player_id, seat, amount) in awarded {
            self.emit(TableEvent::PotAwarded {
                player_id,
                seat,
                amount,
            });
        }

        let winners: Vec<Player> = winner_seats
            .iter()
            .filter_map(|&s| self.player(s))
            .cloned()
            .collect();
        let contestants: Vec<Player> = self
            .players()
            .filter(|p| p.is_contesting())
            .cloned()
            .collect();

        self.emit(TableEvent::HandFinished {
            winners: winners.iter().map(|p| p.id.clone()).collect(),
            pot: self.pot(),
        });

        self.result = Some(HandResult {
            winners,
            contestants,
            table_cards: self.board.clone(),
            pots,
        });
    }

    // ---------------------------------------------------------------------
    // Вспомогательное
    // ---------------------------------------------------------------------

    fn emit(&mut self, event: TableEvent) {
        self.observer.on_event(&event);
    }

    fn set_status(&mut self, status: TableStatus) {
        if self.status != status {
            self.status = status;
            self.emit(TableEvent::StatusChanged { status });
        }
    }

    fn player(&self, seat: SeatIndex) -> Option<&Player> {
        self.seats.get(seat).and_then(Seat::player)
    }

    fn player_mut(&mut self, seat: SeatIndex) -> Option<&mut Player> {
        self.seats.get_mut(seat).and_then(Seat::player_mut)
    }

    fn players(&self) -> impl Iterator<Item = &Player> {
        self.seats.iter().filter_map(Seat::player)
    }

    fn players_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.seats.iter_mut().filter_map(Seat::player_mut)
    }

    fn find_seat(&self, id: &str) -> Option<SeatIndex> {
        self.players().find(|p| p.id == id).map(|p| p.seat)
    }

    fn find_player_mut(&mut self, id: &str) -> Result<&mut Player, TableError> {
        self.players_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| TableError::PlayerNotFound(id.to_string()))
    }

    fn contestant_count(&self) -> usize {
        self.players().filter(|p| p.is_contesting()).count()
    }

    fn owed_by(&self, seat: SeatIndex) -> Chips {
        self.player(seat)
            .map(|p| self.cost.saturating_sub(p.committed))
            .unwrap_or(Chips::ZERO)
    }

    fn pot(&self) -> Chips {
        self.players().map(|p| p.committed).sum()
    }
}
