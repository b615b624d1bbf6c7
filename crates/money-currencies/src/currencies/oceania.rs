//! Oceanian currencies.

use crate::currency::CurrencyConfig;

/// Australian Dollar.
pub static AUD: CurrencyConfig = CurrencyConfig {
    code: "AUD",
    name: "Australian Dollar",
    symbol: "A$",
    exponent: 2,
    locale: "en_AU",
};

/// Fijian Dollar.
pub static FJD: CurrencyConfig = CurrencyConfig {
    code: "FJD",
    name: "Fijian Dollar",
    symbol: "FJ$",
    exponent: 2,
    locale: "en_FJ",
};

/// New Zealand Dollar.
pub static NZD: CurrencyConfig = CurrencyConfig {
    code: "NZD",
    name: "New Zealand Dollar",
    symbol: "NZ$",
    exponent: 2,
    locale: "en_NZ",
};

/// Papua New Guinean Kina.
pub static PGK: CurrencyConfig = CurrencyConfig {
    code: "PGK",
    name: "Papua New Guinean Kina",
    symbol: "K",
    exponent: 2,
    locale: "en_PG",
};

/// Solomon Islands Dollar.
pub static SBD: CurrencyConfig = CurrencyConfig {
    code: "SBD",
    name: "Solomon Islands Dollar",
    symbol: "SI$",
    exponent: 2,
    locale: "en_SB",
};

/// Tongan Paʻanga.
pub static TOP: CurrencyConfig = CurrencyConfig {
    code: "TOP",
    name: "Tongan Paʻanga",
    symbol: "T$",
    exponent: 2,
    locale: "to_TO",
};

/// Vanuatu Vatu.
pub static VUV: CurrencyConfig = CurrencyConfig {
    code: "VUV",
    name: "Vanuatu Vatu",
    symbol: "VT",
    exponent: 0,
    locale: "en_VU",
};

/// Samoan Tālā.
pub static WST: CurrencyConfig = CurrencyConfig {
    code: "WST",
    name: "Samoan Tālā",
    symbol: "WS$",
    exponent: 2,
    locale: "en_WS",
};

/// CFP Franc.
pub static XPF: CurrencyConfig = CurrencyConfig {
    code: "XPF",
    name: "CFP Franc",
    symbol: "₣",
    exponent: 0,
    locale: "fr_PF",
};
