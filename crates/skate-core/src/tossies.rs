//! Tossie Catalog
//!
//! A tossie is revealed as one of fifteen cosmetic types when opened. The
//! roll happens client-side: rarity first (weighted), then a uniform pick
//! among the types of that rarity. The result is persisted by the API.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [Rarity::Common, Rarity::Uncommon, Rarity::Rare, Rarity::Epic, Rarity::Legendary];

    /// Relative roll weight (sums to 100)
    pub fn weight(&self) -> u32 {
        match self {
            Rarity::Common => 60,
            Rarity::Uncommon => 25,
            Rarity::Rare => 10,
            Rarity::Epic => 4,
            Rarity::Legendary => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Rarity::Common => "rarity-common",
            Rarity::Uncommon => "rarity-uncommon",
            Rarity::Rare => "rarity-rare",
            Rarity::Epic => "rarity-epic",
            Rarity::Legendary => "rarity-legendary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TossieCategory {
    Flower,
    Plush,
    Treat,
    Keepsake,
    Trophy,
}

impl TossieCategory {
    pub fn label(&self) -> &'static str {
        match self {
            TossieCategory::Flower => "Flowers",
            TossieCategory::Plush => "Plushies",
            TossieCategory::Treat => "Treats",
            TossieCategory::Keepsake => "Keepsakes",
            TossieCategory::Trophy => "Trophies",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TossieType {
    Rose,
    Carnation,
    DaisyBouquet,
    TeddyBear,
    ChocolateBox,
    Sunflower,
    BunnyPlush,
    PenguinPlush,
    Cupcake,
    HotCocoa,
    SnowflakeCharm,
    CrystalSkate,
    Tiara,
    GoldenBlade,
    IceCrown,
}

impl TossieType {
    pub const ALL: [TossieType; 15] = [
        TossieType::Rose,
        TossieType::Carnation,
        TossieType::DaisyBouquet,
        TossieType::TeddyBear,
        TossieType::ChocolateBox,
        TossieType::Sunflower,
        TossieType::BunnyPlush,
        TossieType::PenguinPlush,
        TossieType::Cupcake,
        TossieType::HotCocoa,
        TossieType::SnowflakeCharm,
        TossieType::CrystalSkate,
        TossieType::Tiara,
        TossieType::GoldenBlade,
        TossieType::IceCrown,
    ];

    /// Stable identifier stored by the API
    pub fn slug(&self) -> &'static str {
        match self {
            TossieType::Rose => "rose",
            TossieType::Carnation => "carnation",
            TossieType::DaisyBouquet => "daisy_bouquet",
            TossieType::TeddyBear => "teddy_bear",
            TossieType::ChocolateBox => "chocolate_box",
            TossieType::Sunflower => "sunflower",
            TossieType::BunnyPlush => "bunny_plush",
            TossieType::PenguinPlush => "penguin_plush",
            TossieType::Cupcake => "cupcake",
            TossieType::HotCocoa => "hot_cocoa",
            TossieType::SnowflakeCharm => "snowflake_charm",
            TossieType::CrystalSkate => "crystal_skate",
            TossieType::Tiara => "tiara",
            TossieType::GoldenBlade => "golden_blade",
            TossieType::IceCrown => "ice_crown",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.slug() == slug)
    }

    pub fn name(&self) -> &'static str {
        match self {
            TossieType::Rose => "Rose",
            TossieType::Carnation => "Carnation",
            TossieType::DaisyBouquet => "Daisy Bouquet",
            TossieType::TeddyBear => "Teddy Bear",
            TossieType::ChocolateBox => "Chocolate Box",
            TossieType::Sunflower => "Sunflower",
            TossieType::BunnyPlush => "Bunny Plush",
            TossieType::PenguinPlush => "Penguin Plush",
            TossieType::Cupcake => "Cupcake",
            TossieType::HotCocoa => "Hot Cocoa",
            TossieType::SnowflakeCharm => "Snowflake Charm",
            TossieType::CrystalSkate => "Crystal Skate",
            TossieType::Tiara => "Tiara",
            TossieType::GoldenBlade => "Golden Blade",
            TossieType::IceCrown => "Ice Crown",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            TossieType::Rose => "🌹",
            TossieType::Carnation => "🌺",
            TossieType::DaisyBouquet => "💐",
            TossieType::TeddyBear => "🧸",
            TossieType::ChocolateBox => "🍫",
            TossieType::Sunflower => "🌻",
            TossieType::BunnyPlush => "🐰",
            TossieType::PenguinPlush => "🐧",
            TossieType::Cupcake => "🧁",
            TossieType::HotCocoa => "☕",
            TossieType::SnowflakeCharm => "❄️",
            TossieType::CrystalSkate => "⛸️",
            TossieType::Tiara => "👸",
            TossieType::GoldenBlade => "🏅",
            TossieType::IceCrown => "👑",
        }
    }

    pub fn category(&self) -> TossieCategory {
        match self {
            TossieType::Rose | TossieType::Carnation | TossieType::DaisyBouquet | TossieType::Sunflower => {
                TossieCategory::Flower
            }
            TossieType::TeddyBear | TossieType::BunnyPlush | TossieType::PenguinPlush => TossieCategory::Plush,
            TossieType::ChocolateBox | TossieType::Cupcake | TossieType::HotCocoa => TossieCategory::Treat,
            TossieType::SnowflakeCharm | TossieType::CrystalSkate | TossieType::Tiara => TossieCategory::Keepsake,
            TossieType::GoldenBlade | TossieType::IceCrown => TossieCategory::Trophy,
        }
    }

    pub fn rarity(&self) -> Rarity {
        match self {
            TossieType::Rose
            | TossieType::Carnation
            | TossieType::DaisyBouquet
            | TossieType::TeddyBear
            | TossieType::ChocolateBox => Rarity::Common,
            TossieType::Sunflower
            | TossieType::BunnyPlush
            | TossieType::PenguinPlush
            | TossieType::Cupcake
            | TossieType::HotCocoa => Rarity::Uncommon,
            TossieType::SnowflakeCharm | TossieType::CrystalSkate => Rarity::Rare,
            TossieType::Tiara | TossieType::GoldenBlade => Rarity::Epic,
            TossieType::IceCrown => Rarity::Legendary,
        }
    }

    pub fn of_rarity(rarity: Rarity) -> impl Iterator<Item = TossieType> {
        Self::ALL.into_iter().filter(move |t| t.rarity() == rarity)
    }
}

/// Roll a rarity by weight, then pick uniformly within it
pub fn choose_tossie_type<R: Rng>(rng: &mut R) -> TossieType {
    let total: u32 = Rarity::ALL.iter().map(Rarity::weight).sum();
    let mut roll = rng.gen_range(0..total);
    let mut rarity = Rarity::Common;
    for candidate in Rarity::ALL {
        if roll < candidate.weight() {
            rarity = candidate;
            break;
        }
        roll -= candidate.weight();
    }

    let pool: Vec<TossieType> = TossieType::of_rarity(rarity).collect();
    pool[rng.gen_range(0..pool.len())]
}

/// Roll with the thread-local generator
pub fn roll_tossie_type() -> TossieType {
    choose_tossie_type(&mut rand::thread_rng())
}

/// Steps of the opening modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpeningPhase {
    /// Wrapped box slides in and shakes
    Entrance,
    /// Box bursts, the tossie is shown
    Reveal,
    /// Modal fades out
    Exit,
    Closed,
}

impl OpeningPhase {
    /// How long the phase lasts before advancing; `None` for the terminal phase
    pub fn duration_ms(&self) -> Option<u32> {
        match self {
            OpeningPhase::Entrance => Some(600),
            OpeningPhase::Reveal => Some(2200),
            OpeningPhase::Exit => Some(450),
            OpeningPhase::Closed => None,
        }
    }

    pub fn next(&self) -> OpeningPhase {
        match self {
            OpeningPhase::Entrance => OpeningPhase::Reveal,
            OpeningPhase::Reveal => OpeningPhase::Exit,
            OpeningPhase::Exit | OpeningPhase::Closed => OpeningPhase::Closed,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            OpeningPhase::Entrance => "tossie-modal entering",
            OpeningPhase::Reveal => "tossie-modal revealed",
            OpeningPhase::Exit => "tossie-modal exiting",
            OpeningPhase::Closed => "tossie-modal closed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_catalog_is_complete() {
        for rarity in Rarity::ALL {
            assert!(TossieType::of_rarity(rarity).count() > 0, "{rarity:?} has no tossies");
        }
        for tossie in TossieType::ALL {
            assert_eq!(TossieType::from_slug(tossie.slug()), Some(tossie));
        }
        assert_eq!(TossieType::from_slug("unicorn"), None);
        assert_eq!(Rarity::ALL.iter().map(Rarity::weight).sum::<u32>(), 100);
    }

    #[test]
    fn test_roll_distribution_follows_weights() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts: HashMap<Rarity, u32> = HashMap::new();
        for _ in 0..20_000 {
            *counts.entry(choose_tossie_type(&mut rng).rarity()).or_default() += 1;
        }
        let common = counts[&Rarity::Common] as f64 / 20_000.0;
        let legendary = counts.get(&Rarity::Legendary).copied().unwrap_or(0) as f64 / 20_000.0;
        assert!((common - 0.60).abs() < 0.03, "common share {common}");
        assert!(legendary < 0.03, "legendary share {legendary}");
        assert!(counts[&Rarity::Uncommon] > counts[&Rarity::Rare]);
    }

    #[test]
    fn test_roll_is_deterministic_for_seed() {
        let a: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| choose_tossie_type(&mut rng)).collect()
        };
        let b: Vec<_> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| choose_tossie_type(&mut rng)).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_opening_phases_run_to_closed() {
        let mut phase = OpeningPhase::Entrance;
        let mut total = 0;
        let mut steps = 0;
        while let Some(ms) = phase.duration_ms() {
            total += ms;
            phase = phase.next();
            steps += 1;
        }
        assert_eq!(phase, OpeningPhase::Closed);
        assert_eq!(steps, 3);
        assert_eq!(total, 3250);
        assert_eq!(OpeningPhase::Closed.next(), OpeningPhase::Closed);
    }
}
