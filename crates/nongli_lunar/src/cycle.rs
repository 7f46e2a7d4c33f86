//! Zodiac animals and the stem-branch (干支) 60-year cycle.
//!
//! Both cycles are anchored on CE 4 = 甲子, the year of the Rat, so for any
//! year `(year - 4) mod 10` selects the heavenly stem and `(year - 4) mod 12`
//! selects the earthly branch and its animal.

/// Reference year: CE 4 = 甲子 (order 1), year of the Rat.
pub const CYCLE_EPOCH_YEAR: i32 = 4;

/// The 12 zodiac animals starting from the Rat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// All 12 animals in order (index 0 = Rat).
pub const ALL_ANIMALS: [ZodiacAnimal; 12] = [
    ZodiacAnimal::Rat,
    ZodiacAnimal::Ox,
    ZodiacAnimal::Tiger,
    ZodiacAnimal::Rabbit,
    ZodiacAnimal::Dragon,
    ZodiacAnimal::Snake,
    ZodiacAnimal::Horse,
    ZodiacAnimal::Goat,
    ZodiacAnimal::Monkey,
    ZodiacAnimal::Rooster,
    ZodiacAnimal::Dog,
    ZodiacAnimal::Pig,
];

impl ZodiacAnimal {
    /// Animal of a (lunar) year.
    pub fn from_year(year: i32) -> Self {
        ALL_ANIMALS[(year - CYCLE_EPOCH_YEAR).rem_euclid(12) as usize]
    }

    /// Chinese name (鼠, 牛, …).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "鼠",
            Self::Ox => "牛",
            Self::Tiger => "虎",
            Self::Rabbit => "兔",
            Self::Dragon => "龙",
            Self::Snake => "蛇",
            Self::Horse => "马",
            Self::Goat => "羊",
            Self::Monkey => "猴",
            Self::Rooster => "鸡",
            Self::Dog => "狗",
            Self::Pig => "猪",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }

    /// 0-based index (Rat=0 .. Pig=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Earthly branch paired with this animal.
    pub const fn branch(self) -> EarthlyBranch {
        ALL_BRANCHES[self.index() as usize]
    }
}

/// The 10 heavenly stems (天干).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (index 0 = 甲).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

const STEM_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

impl HeavenlyStem {
    /// Stem of a (lunar) year.
    pub fn from_year(year: i32) -> Self {
        ALL_STEMS[(year - CYCLE_EPOCH_YEAR).rem_euclid(10) as usize]
    }

    pub const fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// The 12 earthly branches (地支).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (index 0 = 子).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

const BRANCH_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

impl EarthlyBranch {
    /// Branch of a (lunar) year.
    pub fn from_year(year: i32) -> Self {
        ALL_BRANCHES[(year - CYCLE_EPOCH_YEAR).rem_euclid(12) as usize]
    }

    pub const fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Zodiac animal paired with this branch.
    pub const fn animal(self) -> ZodiacAnimal {
        ALL_ANIMALS[self.index() as usize]
    }
}

/// A stem-branch pair naming one year of the 60-year cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StemBranch {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl StemBranch {
    /// Stem-branch name of a (lunar) year.
    pub fn from_year(year: i32) -> Self {
        Self {
            stem: HeavenlyStem::from_year(year),
            branch: EarthlyBranch::from_year(year),
        }
    }

    /// Two-character name, e.g. 甲辰.
    pub fn name(self) -> String {
        let mut s = String::with_capacity(6);
        s.push_str(self.stem.name());
        s.push_str(self.branch.name());
        s
    }

    /// 1-based position in the 60-year cycle (甲子 = 1, 癸亥 = 60).
    pub fn order(self) -> u8 {
        let (s, b) = (self.stem.index() as i32, self.branch.index() as i32);
        // the unique n in 0..60 with n ≡ s (mod 10) and n ≡ b (mod 12)
        let n = (6 * s - 5 * b).rem_euclid(60);
        n as u8 + 1
    }
}

/// Chinese zodiac animal name of a (lunar) year.
pub fn zodiac_animal(year: i32) -> &'static str {
    ZodiacAnimal::from_year(year).name()
}

/// Stem-branch name of a (lunar) year.
pub fn stem_branch_year_name(year: i32) -> String {
    StemBranch::from_year(year).name()
}
