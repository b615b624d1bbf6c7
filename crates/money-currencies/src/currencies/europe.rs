//! European currencies.

use crate::currency::CurrencyConfig;

/// Albanian Lek.
pub static ALL: CurrencyConfig = CurrencyConfig {
    code: "ALL",
    name: "Albanian Lek",
    symbol: "L",
    exponent: 2,
    locale: "sq_AL",
};

/// Bosnia-Herzegovina Convertible Mark.
pub static BAM: CurrencyConfig = CurrencyConfig {
    code: "BAM",
    name: "Bosnia-Herzegovina Convertible Mark",
    symbol: "KM",
    exponent: 2,
    locale: "bs_BA",
};

/// Bulgarian Lev.
pub static BGN: CurrencyConfig = CurrencyConfig {
    code: "BGN",
    name: "Bulgarian Lev",
    symbol: "лв",
    exponent: 2,
    locale: "bg_BG",
};

/// Belarusian Ruble.
pub static BYN: CurrencyConfig = CurrencyConfig {
    code: "BYN",
    name: "Belarusian Ruble",
    symbol: "Br",
    exponent: 2,
    locale: "be_BY",
};

/// Swiss Franc.
pub static CHF: CurrencyConfig = CurrencyConfig {
    code: "CHF",
    name: "Swiss Franc",
    symbol: "CHF",
    exponent: 2,
    locale: "de_CH",
};

/// Czech Koruna.
pub static CZK: CurrencyConfig = CurrencyConfig {
    code: "CZK",
    name: "Czech Koruna",
    symbol: "Kč",
    exponent: 2,
    locale: "cs_CZ",
};

/// Danish Krone.
pub static DKK: CurrencyConfig = CurrencyConfig {
    code: "DKK",
    name: "Danish Krone",
    symbol: "kr.",
    exponent: 2,
    locale: "da_DK",
};

/// Euro.
pub static EUR: CurrencyConfig = CurrencyConfig {
    code: "EUR",
    name: "Euro",
    symbol: "€",
    exponent: 2,
    locale: "de_DE",
};

/// British Pound.
pub static GBP: CurrencyConfig = CurrencyConfig {
    code: "GBP",
    name: "British Pound",
    symbol: "£",
    exponent: 2,
    locale: "en_GB",
};

/// Gibraltar Pound.
pub static GIP: CurrencyConfig = CurrencyConfig {
    code: "GIP",
    name: "Gibraltar Pound",
    symbol: "£",
    exponent: 2,
    locale: "en_GI",
};

/// Hungarian Forint.
///
/// Charged as a two-decimal amount; payouts must be whole forints
/// (minor amount divisible by 100).
pub static HUF: CurrencyConfig = CurrencyConfig {
    code: "HUF",
    name: "Hungarian Forint",
    symbol: "Ft",
    exponent: 2,
    locale: "hu_HU",
};

/// Icelandic Króna.
///
/// Zero-decimal in practice, but payment APIs still take it as a
/// two-decimal amount that must be divisible by 100.
pub static ISK: CurrencyConfig = CurrencyConfig {
    code: "ISK",
    name: "Icelandic Króna",
    symbol: "kr",
    exponent: 2,
    locale: "is_IS",
};

/// Moldovan Leu.
pub static MDL: CurrencyConfig = CurrencyConfig {
    code: "MDL",
    name: "Moldovan Leu",
    symbol: "L",
    exponent: 2,
    locale: "ro_MD",
};

/// Macedonian Denar.
pub static MKD: CurrencyConfig = CurrencyConfig {
    code: "MKD",
    name: "Macedonian Denar",
    symbol: "ден",
    exponent: 2,
    locale: "mk_MK",
};

/// Norwegian Krone.
pub static NOK: CurrencyConfig = CurrencyConfig {
    code: "NOK",
    name: "Norwegian Krone",
    symbol: "kr",
    exponent: 2,
    locale: "nb_NO",
};

/// Polish Złoty.
pub static PLN: CurrencyConfig = CurrencyConfig {
    code: "PLN",
    name: "Polish Złoty",
    symbol: "zł",
    exponent: 2,
    locale: "pl_PL",
};

/// Romanian Leu.
pub static RON: CurrencyConfig = CurrencyConfig {
    code: "RON",
    name: "Romanian Leu",
    symbol: "lei",
    exponent: 2,
    locale: "ro_RO",
};

/// Serbian Dinar.
pub static RSD: CurrencyConfig = CurrencyConfig {
    code: "RSD",
    name: "Serbian Dinar",
    symbol: "дин.",
    exponent: 2,
    locale: "sr_RS",
};

/// Russian Ruble.
pub static RUB: CurrencyConfig = CurrencyConfig {
    code: "RUB",
    name: "Russian Ruble",
    symbol: "₽",
    exponent: 2,
    locale: "ru_RU",
};

/// Swedish Krona.
pub static SEK: CurrencyConfig = CurrencyConfig {
    code: "SEK",
    name: "Swedish Krona",
    symbol: "kr",
    exponent: 2,
    locale: "sv_SE",
};

/// Turkish Lira.
pub static TRY: CurrencyConfig = CurrencyConfig {
    code: "TRY",
    name: "Turkish Lira",
    symbol: "₺",
    exponent: 2,
    locale: "tr_TR",
};

/// Ukrainian Hryvnia.
pub static UAH: CurrencyConfig = CurrencyConfig {
    code: "UAH",
    name: "Ukrainian Hryvnia",
    symbol: "₴",
    exponent: 2,
    locale: "uk_UA",
};
