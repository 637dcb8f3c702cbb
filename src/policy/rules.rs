//! Per-planet decision table.
//!
//! Each candidate planet is run through `RULES` in order and the first rule
//! whose predicate holds decides what happens with it. `Skip` moves on to
//! the next-nearest planet; every other verdict ends the ship's turn. The
//! last rule always matches.

use crate::eval::{PlanetClass, TurnFacts};
use crate::map::Planet;

/// One planet as seen from the ship being decided.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub planet: &'a Planet,
    pub class: PlanetClass,
    pub in_dock_range: bool,
    pub facts: TurnFacts,
}

/// What a matching rule asks the ship to do with the candidate planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Dock,
    Skip,
    Attack,
    Approach,
}

/// A named predicate and the verdict it yields.
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&Candidate<'_>) -> bool,
    pub verdict: Verdict,
}

fn dockable_now(c: &Candidate<'_>) -> bool {
    !c.planet.is_full() && c.in_dock_range
}

fn owned_while_free_remain(c: &Candidate<'_>) -> bool {
    c.planet.is_owned() && c.facts.free_planets
}

fn own_and_full(c: &Candidate<'_>) -> bool {
    c.class == PlanetClass::Mine && c.planet.is_full()
}

fn own_while_saturated(c: &Candidate<'_>) -> bool {
    c.facts.saturated() && c.class == PlanetClass::Mine
}

fn rival_while_saturated(c: &Candidate<'_>) -> bool {
    c.facts.saturated()
}

fn always(_: &Candidate<'_>) -> bool {
    true
}

/// Rules in priority order.
pub static RULES: [Rule; 6] = [
    Rule {
        name: "dock",
        applies: dockable_now,
        verdict: Verdict::Dock,
    },
    Rule {
        name: "owned-while-free-remain",
        applies: owned_while_free_remain,
        verdict: Verdict::Skip,
    },
    Rule {
        name: "own-full",
        applies: own_and_full,
        verdict: Verdict::Skip,
    },
    Rule {
        name: "own-while-saturated",
        applies: own_while_saturated,
        verdict: Verdict::Skip,
    },
    Rule {
        name: "attack",
        applies: rival_while_saturated,
        verdict: Verdict::Attack,
    },
    Rule {
        name: "approach",
        applies: always,
        verdict: Verdict::Approach,
    },
];

/// Returns the first rule that matches `candidate`.
pub fn first_match(candidate: &Candidate<'_>) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| (rule.applies)(candidate))
        .unwrap_or(&RULES[RULES.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{PlayerId, Position, ShipId};

    const ME: PlayerId = 0;

    fn planet(owner: Option<PlayerId>, spots: usize, docked: Vec<ShipId>) -> Planet {
        Planet {
            id: 1,
            position: Position::new(0.0, 0.0),
            radius: 3.0,
            health: 1000,
            docking_spots: spots,
            owner,
            docked_ships: docked,
        }
    }

    fn verdict(p: &Planet, in_dock_range: bool, free_planets: bool, owned_planets_full: bool) -> Verdict {
        let c = Candidate {
            planet: p,
            class: PlanetClass::of(p, ME),
            in_dock_range,
            facts: TurnFacts {
                free_planets,
                owned_planets_full,
            },
        };
        first_match(&c).verdict
    }

    #[test]
    fn docking_beats_everything() {
        let rival = planet(Some(1), 3, vec![5]);
        assert_eq!(verdict(&rival, true, true, true), Verdict::Dock);
        assert_eq!(verdict(&rival, true, false, true), Verdict::Dock);
        let free = planet(None, 2, vec![]);
        assert_eq!(verdict(&free, true, true, false), Verdict::Dock);
    }

    #[test]
    fn full_planet_is_never_docked() {
        let mine = planet(Some(ME), 1, vec![4]);
        assert_eq!(verdict(&mine, true, false, false), Verdict::Skip);
    }

    #[test]
    fn owned_planets_wait_while_free_ones_remain() {
        let rival = planet(Some(1), 3, vec![5]);
        assert_eq!(verdict(&rival, false, true, false), Verdict::Skip);
        let mine = planet(Some(ME), 3, vec![2]);
        assert_eq!(verdict(&mine, false, true, false), Verdict::Skip);
    }

    #[test]
    fn free_planet_out_of_range_is_approached() {
        let free = planet(None, 2, vec![]);
        assert_eq!(verdict(&free, false, true, true), Verdict::Approach);
    }

    #[test]
    fn own_unfilled_planet_is_approached() {
        let mine = planet(Some(ME), 3, vec![2]);
        assert_eq!(verdict(&mine, false, false, false), Verdict::Approach);
    }

    #[test]
    fn rival_planet_is_attacked_when_saturated() {
        let rival = planet(Some(1), 3, vec![5]);
        assert_eq!(verdict(&rival, false, false, true), Verdict::Attack);
    }

    #[test]
    fn own_planet_is_never_attacked() {
        // Not full but saturated cannot come from a real snapshot; the rule still skips it.
        let mine = planet(Some(ME), 3, vec![2]);
        assert_eq!(verdict(&mine, false, false, true), Verdict::Skip);
    }

    #[test]
    fn rival_planet_without_saturation_is_approached() {
        let rival = planet(Some(1), 3, vec![5]);
        assert_eq!(verdict(&rival, false, false, false), Verdict::Approach);
    }

    #[test]
    fn table_order_is_fixed() {
        let names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "dock",
                "owned-while-free-remain",
                "own-full",
                "own-while-saturated",
                "attack",
                "approach",
            ]
        );
    }
}
