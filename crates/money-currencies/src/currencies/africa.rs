//! African currencies.

use crate::currency::CurrencyConfig;

/// Angolan Kwanza.
pub static AOA: CurrencyConfig = CurrencyConfig {
    code: "AOA",
    name: "Angolan Kwanza",
    symbol: "Kz",
    exponent: 2,
    locale: "pt_AO",
};

/// Burundian Franc.
pub static BIF: CurrencyConfig = CurrencyConfig {
    code: "BIF",
    name: "Burundian Franc",
    symbol: "FBu",
    exponent: 0,
    locale: "fr_BI",
};

/// Botswana Pula.
pub static BWP: CurrencyConfig = CurrencyConfig {
    code: "BWP",
    name: "Botswana Pula",
    symbol: "P",
    exponent: 2,
    locale: "en_BW",
};

/// Congolese Franc.
pub static CDF: CurrencyConfig = CurrencyConfig {
    code: "CDF",
    name: "Congolese Franc",
    symbol: "FC",
    exponent: 2,
    locale: "fr_CD",
};

/// Cape Verdean Escudo.
pub static CVE: CurrencyConfig = CurrencyConfig {
    code: "CVE",
    name: "Cape Verdean Escudo",
    symbol: "Esc",
    exponent: 2,
    locale: "pt_CV",
};

/// Djiboutian Franc.
pub static DJF: CurrencyConfig = CurrencyConfig {
    code: "DJF",
    name: "Djiboutian Franc",
    symbol: "Fdj",
    exponent: 0,
    locale: "fr_DJ",
};

/// Algerian Dinar.
pub static DZD: CurrencyConfig = CurrencyConfig {
    code: "DZD",
    name: "Algerian Dinar",
    symbol: "DA",
    exponent: 2,
    locale: "ar_DZ",
};

/// Egyptian Pound.
pub static EGP: CurrencyConfig = CurrencyConfig {
    code: "EGP",
    name: "Egyptian Pound",
    symbol: "E£",
    exponent: 2,
    locale: "ar_EG",
};

/// Ethiopian Birr.
pub static ETB: CurrencyConfig = CurrencyConfig {
    code: "ETB",
    name: "Ethiopian Birr",
    symbol: "Br",
    exponent: 2,
    locale: "am_ET",
};

/// Gambian Dalasi.
pub static GMD: CurrencyConfig = CurrencyConfig {
    code: "GMD",
    name: "Gambian Dalasi",
    symbol: "D",
    exponent: 2,
    locale: "en_GM",
};

/// Guinean Franc.
pub static GNF: CurrencyConfig = CurrencyConfig {
    code: "GNF",
    name: "Guinean Franc",
    symbol: "FG",
    exponent: 0,
    locale: "fr_GN",
};

/// Kenyan Shilling.
pub static KES: CurrencyConfig = CurrencyConfig {
    code: "KES",
    name: "Kenyan Shilling",
    symbol: "KSh",
    exponent: 2,
    locale: "en_KE",
};

/// Comorian Franc.
pub static KMF: CurrencyConfig = CurrencyConfig {
    code: "KMF",
    name: "Comorian Franc",
    symbol: "CF",
    exponent: 0,
    locale: "fr_KM",
};

/// Liberian Dollar.
pub static LRD: CurrencyConfig = CurrencyConfig {
    code: "LRD",
    name: "Liberian Dollar",
    symbol: "L$",
    exponent: 2,
    locale: "en_LR",
};

/// Lesotho Loti.
pub static LSL: CurrencyConfig = CurrencyConfig {
    code: "LSL",
    name: "Lesotho Loti",
    symbol: "L",
    exponent: 2,
    locale: "en_LS",
};

/// Moroccan Dirham.
pub static MAD: CurrencyConfig = CurrencyConfig {
    code: "MAD",
    name: "Moroccan Dirham",
    symbol: "DH",
    exponent: 2,
    locale: "ar_MA",
};

/// Malagasy Ariary.
pub static MGA: CurrencyConfig = CurrencyConfig {
    code: "MGA",
    name: "Malagasy Ariary",
    symbol: "Ar",
    exponent: 0,
    locale: "mg_MG",
};

/// Mauritian Rupee.
pub static MUR: CurrencyConfig = CurrencyConfig {
    code: "MUR",
    name: "Mauritian Rupee",
    symbol: "₨",
    exponent: 2,
    locale: "en_MU",
};

/// Malawian Kwacha.
pub static MWK: CurrencyConfig = CurrencyConfig {
    code: "MWK",
    name: "Malawian Kwacha",
    symbol: "MK",
    exponent: 2,
    locale: "en_MW",
};

/// Mozambican Metical.
pub static MZN: CurrencyConfig = CurrencyConfig {
    code: "MZN",
    name: "Mozambican Metical",
    symbol: "MT",
    exponent: 2,
    locale: "pt_MZ",
};

/// Namibian Dollar.
pub static NAD: CurrencyConfig = CurrencyConfig {
    code: "NAD",
    name: "Namibian Dollar",
    symbol: "N$",
    exponent: 2,
    locale: "en_NA",
};

/// Nigerian Naira.
pub static NGN: CurrencyConfig = CurrencyConfig {
    code: "NGN",
    name: "Nigerian Naira",
    symbol: "₦",
    exponent: 2,
    locale: "en_NG",
};

/// Rwandan Franc.
pub static RWF: CurrencyConfig = CurrencyConfig {
    code: "RWF",
    name: "Rwandan Franc",
    symbol: "FRw",
    exponent: 0,
    locale: "rw_RW",
};

/// Seychellois Rupee.
pub static SCR: CurrencyConfig = CurrencyConfig {
    code: "SCR",
    name: "Seychellois Rupee",
    symbol: "SRe",
    exponent: 2,
    locale: "en_SC",
};

/// Saint Helena Pound.
pub static SHP: CurrencyConfig = CurrencyConfig {
    code: "SHP",
    name: "Saint Helena Pound",
    symbol: "£",
    exponent: 2,
    locale: "en_SH",
};

/// Sierra Leonean Leone.
pub static SLE: CurrencyConfig = CurrencyConfig {
    code: "SLE",
    name: "Sierra Leonean Leone",
    symbol: "Le",
    exponent: 2,
    locale: "en_SL",
};

/// Somali Shilling.
pub static SOS: CurrencyConfig = CurrencyConfig {
    code: "SOS",
    name: "Somali Shilling",
    symbol: "Sh",
    exponent: 2,
    locale: "so_SO",
};

/// São Tomé and Príncipe Dobra.
pub static STD: CurrencyConfig = CurrencyConfig {
    code: "STD",
    name: "São Tomé and Príncipe Dobra",
    symbol: "Db",
    exponent: 2,
    locale: "pt_ST",
};

/// Swazi Lilangeni.
pub static SZL: CurrencyConfig = CurrencyConfig {
    code: "SZL",
    name: "Swazi Lilangeni",
    symbol: "E",
    exponent: 2,
    locale: "en_SZ",
};

/// Tunisian Dinar.
pub static TND: CurrencyConfig = CurrencyConfig {
    code: "TND",
    name: "Tunisian Dinar",
    symbol: "DT",
    exponent: 3,
    locale: "ar_TN",
};

/// Tanzanian Shilling.
pub static TZS: CurrencyConfig = CurrencyConfig {
    code: "TZS",
    name: "Tanzanian Shilling",
    symbol: "TSh",
    exponent: 2,
    locale: "sw_TZ",
};

/// Ugandan Shilling.
///
/// Zero-decimal in practice, but payment APIs still take it as a
/// two-decimal amount that must be divisible by 100.
pub static UGX: CurrencyConfig = CurrencyConfig {
    code: "UGX",
    name: "Ugandan Shilling",
    symbol: "USh",
    exponent: 2,
    locale: "en_UG",
};

/// Central African CFA Franc.
pub static XAF: CurrencyConfig = CurrencyConfig {
    code: "XAF",
    name: "Central African CFA Franc",
    symbol: "FCFA",
    exponent: 0,
    locale: "fr_CM",
};

/// West African CFA Franc.
pub static XOF: CurrencyConfig = CurrencyConfig {
    code: "XOF",
    name: "West African CFA Franc",
    symbol: "CFA",
    exponent: 0,
    locale: "fr_SN",
};

/// South African Rand.
pub static ZAR: CurrencyConfig = CurrencyConfig {
    code: "ZAR",
    name: "South African Rand",
    symbol: "R",
    exponent: 2,
    locale: "en_ZA",
};

/// Zambian Kwacha.
pub static ZMW: CurrencyConfig = CurrencyConfig {
    code: "ZMW",
    name: "Zambian Kwacha",
    symbol: "ZK",
    exponent: 2,
    locale: "en_ZM",
};
