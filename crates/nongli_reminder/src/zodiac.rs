//! Western zodiac signs.

/// The twelve sun signs, starting from Capricorn (the sign covering 1 January).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
}

/// All signs in calendar order from January.
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
];

/// Last day (inclusive) of the sign that starts the month, indexed by
/// month - 1. `ALL_SIGNS[i]` ends on `(i + 1, SIGN_END_DAYS[i])`.
const SIGN_END_DAYS: [u32; 12] = [19, 18, 20, 19, 20, 21, 22, 22, 22, 23, 22, 21];

impl ZodiacSign {
    /// Chinese name with the 座 suffix.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Capricorn => "摩羯座",
            Self::Aquarius => "水瓶座",
            Self::Pisces => "双鱼座",
            Self::Aries => "白羊座",
            Self::Taurus => "金牛座",
            Self::Gemini => "双子座",
            Self::Cancer => "巨蟹座",
            Self::Leo => "狮子座",
            Self::Virgo => "处女座",
            Self::Libra => "天秤座",
            Self::Scorpio => "天蝎座",
            Self::Sagittarius => "射手座",
        }
    }

    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
        }
    }

    /// 0-based index into [`ALL_SIGNS`].
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Sign for a (month, day) pair.
///
/// Month/day are not validated against a calendar; a month outside 1..=12
/// falls through to Capricorn.
pub fn zodiac_sign(month: u32, day: u32) -> ZodiacSign {
    if !(1..=12).contains(&month) {
        return ZodiacSign::Capricorn;
    }
    let idx = (month - 1) as usize;
    if day <= SIGN_END_DAYS[idx] {
        ALL_SIGNS[idx]
    } else {
        ALL_SIGNS[(idx + 1) % 12]
    }
}
