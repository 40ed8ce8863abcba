//! Hearts and Diamonds effects.
//!
//! Applied after damage but while the played cards are still in the hand,
//! so the size the hand will have after the play is `hand.len() - played`.
//! Hearts resolves before Diamonds and each recomputes that size, which
//! keeps the hand at or under the cap when both fire.
//!
//! Spades and Clubs are handled in `BattleResolver`; nothing happens here
//! for them.

use super::battle::{suit_power, BattleResult, EffectLimit, EffectNote};
use crate::cards::{Card, Deck, Hand, Suit};
use crate::core::rng::GameRng;

/// Everything a suit effect may read or move cards between.
pub struct SuitEffectContext<'a> {
    pub hand: &'a mut Hand,
    pub deck: &'a mut Deck,
    pub discard: &'a mut Vec<Card>,
    pub rng: &'a mut GameRng,
    pub max_hand_size: usize,
}

impl SuitEffectContext<'_> {
    fn predicted_hand_size(&self, played: usize) -> usize {
        self.hand.len().saturating_sub(played)
    }
}

pub struct SuitEffectEngine;

impl SuitEffectEngine {
    /// Apply every suit effect present in `cards`, recording notes and counts on `result`.
    pub fn apply(ctx: &mut SuitEffectContext<'_>, cards: &[Card], result: &mut BattleResult) {
        let hearts = suit_power(cards, Suit::Hearts);
        if hearts > 0 {
            Self::heal(ctx, hearts as usize, cards.len(), result);
        }

        let diamonds = suit_power(cards, Suit::Diamonds);
        if diamonds > 0 {
            Self::draw(ctx, diamonds as usize, cards.len(), result);
        }
    }

    /// Move up to `power` random cards from the discard pile into the hand.
    fn heal(ctx: &mut SuitEffectContext<'_>, power: usize, played: usize, result: &mut BattleResult) {
        let predicted = ctx.predicted_hand_size(played);
        if predicted >= ctx.max_hand_size {
            result.add_effect(EffectNote::HeartsHandFull { cap: ctx.max_hand_size });
            return;
        }
        if ctx.discard.is_empty() {
            result.add_effect(EffectNote::HeartsDiscardEmpty);
            return;
        }

        let room = ctx.max_hand_size - predicted;
        let available = ctx.discard.len();
        let amount = power.min(available).min(room);

        let mut picked = ctx.rng.sample_indices(available, amount);
        // Highest index first so earlier removals don't shift later ones
        picked.sort_unstable_by(|a, b| b.cmp(a));
        let healed: Vec<Card> = picked.into_iter().map(|i| ctx.discard.remove(i)).collect();
        ctx.hand.add_cards(healed.iter().copied());

        let limit = if amount == power {
            None
        } else if room <= available {
            Some(EffectLimit::HandSize)
        } else {
            Some(EffectLimit::DiscardPile)
        };

        tracing::debug!(power, healed = amount, ?limit, "hearts heal");
        result.cards_healed += amount;
        result.add_effect(EffectNote::HeartsHealed { count: amount, limit });
    }

    /// Draw up to `power` cards from the top of the deck.
    fn draw(ctx: &mut SuitEffectContext<'_>, power: usize, played: usize, result: &mut BattleResult) {
        let predicted = ctx.predicted_hand_size(played);
        if predicted >= ctx.max_hand_size {
            result.add_effect(EffectNote::DiamondsHandFull { cap: ctx.max_hand_size });
            return;
        }

        let wanted = power.min(ctx.max_hand_size - predicted);
        let drawn = ctx.deck.draw_many(wanted);
        if drawn.is_empty() {
            result.add_effect(EffectNote::DiamondsDeckEmpty);
            return;
        }

        let count = drawn.len();
        let limit = if count == power {
            None
        } else if count < wanted {
            Some(EffectLimit::Deck)
        } else {
            Some(EffectLimit::HandSize)
        };
        ctx.hand.add_cards(drawn);

        tracing::debug!(power, drawn = count, ?limit, "diamonds draw");
        result.cards_drawn += count;
        result.add_effect(EffectNote::DiamondsDrew { count, limit });
    }
}
