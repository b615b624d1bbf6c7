//! Currencies of the Americas and the Caribbean.

use crate::currency::CurrencyConfig;

/// Netherlands Antillean Guilder.
pub static ANG: CurrencyConfig = CurrencyConfig {
    code: "ANG",
    name: "Netherlands Antillean Guilder",
    symbol: "ƒ",
    exponent: 2,
    locale: "nl_CW",
};

/// Argentine Peso.
pub static ARS: CurrencyConfig = CurrencyConfig {
    code: "ARS",
    name: "Argentine Peso",
    symbol: "$",
    exponent: 2,
    locale: "es_AR",
};

/// Aruban Florin.
pub static AWG: CurrencyConfig = CurrencyConfig {
    code: "AWG",
    name: "Aruban Florin",
    symbol: "Afl.",
    exponent: 2,
    locale: "nl_AW",
};

/// Barbadian Dollar.
pub static BBD: CurrencyConfig = CurrencyConfig {
    code: "BBD",
    name: "Barbadian Dollar",
    symbol: "Bds$",
    exponent: 2,
    locale: "en_BB",
};

/// Bermudian Dollar.
pub static BMD: CurrencyConfig = CurrencyConfig {
    code: "BMD",
    name: "Bermudian Dollar",
    symbol: "BD$",
    exponent: 2,
    locale: "en_BM",
};

/// Bolivian Boliviano.
pub static BOB: CurrencyConfig = CurrencyConfig {
    code: "BOB",
    name: "Bolivian Boliviano",
    symbol: "Bs.",
    exponent: 2,
    locale: "es_BO",
};

/// Brazilian Real.
pub static BRL: CurrencyConfig = CurrencyConfig {
    code: "BRL",
    name: "Brazilian Real",
    symbol: "R$",
    exponent: 2,
    locale: "pt_BR",
};

/// Bahamian Dollar.
pub static BSD: CurrencyConfig = CurrencyConfig {
    code: "BSD",
    name: "Bahamian Dollar",
    symbol: "B$",
    exponent: 2,
    locale: "en_BS",
};

/// Belize Dollar.
pub static BZD: CurrencyConfig = CurrencyConfig {
    code: "BZD",
    name: "Belize Dollar",
    symbol: "BZ$",
    exponent: 2,
    locale: "en_BZ",
};

/// Canadian Dollar.
pub static CAD: CurrencyConfig = CurrencyConfig {
    code: "CAD",
    name: "Canadian Dollar",
    symbol: "CA$",
    exponent: 2,
    locale: "en_CA",
};

/// Chilean Peso.
pub static CLP: CurrencyConfig = CurrencyConfig {
    code: "CLP",
    name: "Chilean Peso",
    symbol: "CLP$",
    exponent: 0,
    locale: "es_CL",
};

/// Colombian Peso.
pub static COP: CurrencyConfig = CurrencyConfig {
    code: "COP",
    name: "Colombian Peso",
    symbol: "COL$",
    exponent: 2,
    locale: "es_CO",
};

/// Costa Rican Colón.
pub static CRC: CurrencyConfig = CurrencyConfig {
    code: "CRC",
    name: "Costa Rican Colón",
    symbol: "₡",
    exponent: 2,
    locale: "es_CR",
};

/// Dominican Peso.
pub static DOP: CurrencyConfig = CurrencyConfig {
    code: "DOP",
    name: "Dominican Peso",
    symbol: "RD$",
    exponent: 2,
    locale: "es_DO",
};

/// Falkland Islands Pound.
pub static FKP: CurrencyConfig = CurrencyConfig {
    code: "FKP",
    name: "Falkland Islands Pound",
    symbol: "FK£",
    exponent: 2,
    locale: "en_FK",
};

/// Guatemalan Quetzal.
pub static GTQ: CurrencyConfig = CurrencyConfig {
    code: "GTQ",
    name: "Guatemalan Quetzal",
    symbol: "Q",
    exponent: 2,
    locale: "es_GT",
};

/// Guyanese Dollar.
pub static GYD: CurrencyConfig = CurrencyConfig {
    code: "GYD",
    name: "Guyanese Dollar",
    symbol: "G$",
    exponent: 2,
    locale: "en_GY",
};

/// Honduran Lempira.
pub static HNL: CurrencyConfig = CurrencyConfig {
    code: "HNL",
    name: "Honduran Lempira",
    symbol: "L",
    exponent: 2,
    locale: "es_HN",
};

/// Haitian Gourde.
pub static HTG: CurrencyConfig = CurrencyConfig {
    code: "HTG",
    name: "Haitian Gourde",
    symbol: "G",
    exponent: 2,
    locale: "fr_HT",
};

/// Jamaican Dollar.
pub static JMD: CurrencyConfig = CurrencyConfig {
    code: "JMD",
    name: "Jamaican Dollar",
    symbol: "J$",
    exponent: 2,
    locale: "en_JM",
};

/// Cayman Islands Dollar.
pub static KYD: CurrencyConfig = CurrencyConfig {
    code: "KYD",
    name: "Cayman Islands Dollar",
    symbol: "CI$",
    exponent: 2,
    locale: "en_KY",
};

/// Mexican Peso.
pub static MXN: CurrencyConfig = CurrencyConfig {
    code: "MXN",
    name: "Mexican Peso",
    symbol: "MX$",
    exponent: 2,
    locale: "es_MX",
};

/// Nicaraguan Córdoba.
pub static NIO: CurrencyConfig = CurrencyConfig {
    code: "NIO",
    name: "Nicaraguan Córdoba",
    symbol: "C$",
    exponent: 2,
    locale: "es_NI",
};

/// Panamanian Balboa.
pub static PAB: CurrencyConfig = CurrencyConfig {
    code: "PAB",
    name: "Panamanian Balboa",
    symbol: "B/.",
    exponent: 2,
    locale: "es_PA",
};

/// Peruvian Sol.
pub static PEN: CurrencyConfig = CurrencyConfig {
    code: "PEN",
    name: "Peruvian Sol",
    symbol: "S/",
    exponent: 2,
    locale: "es_PE",
};

/// Paraguayan Guaraní.
pub static PYG: CurrencyConfig = CurrencyConfig {
    code: "PYG",
    name: "Paraguayan Guaraní",
    symbol: "₲",
    exponent: 0,
    locale: "es_PY",
};

/// Surinamese Dollar.
pub static SRD: CurrencyConfig = CurrencyConfig {
    code: "SRD",
    name: "Surinamese Dollar",
    symbol: "SRD",
    exponent: 2,
    locale: "nl_SR",
};

/// Trinidad and Tobago Dollar.
pub static TTD: CurrencyConfig = CurrencyConfig {
    code: "TTD",
    name: "Trinidad and Tobago Dollar",
    symbol: "TT$",
    exponent: 2,
    locale: "en_TT",
};

/// United States Dollar.
pub static USD: CurrencyConfig = CurrencyConfig {
    code: "USD",
    name: "United States Dollar",
    symbol: "$",
    exponent: 2,
    locale: "en_US",
};

/// Uruguayan Peso.
pub static UYU: CurrencyConfig = CurrencyConfig {
    code: "UYU",
    name: "Uruguayan Peso",
    symbol: "$U",
    exponent: 2,
    locale: "es_UY",
};

/// East Caribbean Dollar.
pub static XCD: CurrencyConfig = CurrencyConfig {
    code: "XCD",
    name: "East Caribbean Dollar",
    symbol: "EC$",
    exponent: 2,
    locale: "en_AG",
};
