//! Asian and Middle Eastern currencies.

use crate::currency::CurrencyConfig;

/// United Arab Emirates Dirham.
pub static AED: CurrencyConfig = CurrencyConfig {
    code: "AED",
    name: "United Arab Emirates Dirham",
    symbol: "AED",
    exponent: 2,
    locale: "ar_AE",
};

/// Afghan Afghani.
pub static AFN: CurrencyConfig = CurrencyConfig {
    code: "AFN",
    name: "Afghan Afghani",
    symbol: "؋",
    exponent: 2,
    locale: "fa_AF",
};

/// Armenian Dram.
pub static AMD: CurrencyConfig = CurrencyConfig {
    code: "AMD",
    name: "Armenian Dram",
    symbol: "֏",
    exponent: 2,
    locale: "hy_AM",
};

/// Azerbaijani Manat.
pub static AZN: CurrencyConfig = CurrencyConfig {
    code: "AZN",
    name: "Azerbaijani Manat",
    symbol: "₼",
    exponent: 2,
    locale: "az_AZ",
};

/// Bangladeshi Taka.
pub static BDT: CurrencyConfig = CurrencyConfig {
    code: "BDT",
    name: "Bangladeshi Taka",
    symbol: "৳",
    exponent: 2,
    locale: "bn_BD",
};

/// Bahraini Dinar.
pub static BHD: CurrencyConfig = CurrencyConfig {
    code: "BHD",
    name: "Bahraini Dinar",
    symbol: "BD",
    exponent: 3,
    locale: "ar_BH",
};

/// Brunei Dollar.
pub static BND: CurrencyConfig = CurrencyConfig {
    code: "BND",
    name: "Brunei Dollar",
    symbol: "B$",
    exponent: 2,
    locale: "ms_BN",
};

/// Chinese Yuan.
pub static CNY: CurrencyConfig = CurrencyConfig {
    code: "CNY",
    name: "Chinese Yuan",
    symbol: "¥",
    exponent: 2,
    locale: "zh_CN",
};

/// Georgian Lari.
pub static GEL: CurrencyConfig = CurrencyConfig {
    code: "GEL",
    name: "Georgian Lari",
    symbol: "₾",
    exponent: 2,
    locale: "ka_GE",
};

/// Hong Kong Dollar.
pub static HKD: CurrencyConfig = CurrencyConfig {
    code: "HKD",
    name: "Hong Kong Dollar",
    symbol: "HK$",
    exponent: 2,
    locale: "zh_HK",
};

/// Indonesian Rupiah.
pub static IDR: CurrencyConfig = CurrencyConfig {
    code: "IDR",
    name: "Indonesian Rupiah",
    symbol: "Rp",
    exponent: 2,
    locale: "id_ID",
};

/// Israeli New Shekel.
pub static ILS: CurrencyConfig = CurrencyConfig {
    code: "ILS",
    name: "Israeli New Shekel",
    symbol: "₪",
    exponent: 2,
    locale: "he_IL",
};

/// Indian Rupee.
pub static INR: CurrencyConfig = CurrencyConfig {
    code: "INR",
    name: "Indian Rupee",
    symbol: "₹",
    exponent: 2,
    locale: "en_IN",
};

/// Jordanian Dinar.
pub static JOD: CurrencyConfig = CurrencyConfig {
    code: "JOD",
    name: "Jordanian Dinar",
    symbol: "JD",
    exponent: 3,
    locale: "ar_JO",
};

/// Japanese Yen.
pub static JPY: CurrencyConfig = CurrencyConfig {
    code: "JPY",
    name: "Japanese Yen",
    symbol: "¥",
    exponent: 0,
    locale: "ja_JP",
};

/// Kyrgyzstani Som.
pub static KGS: CurrencyConfig = CurrencyConfig {
    code: "KGS",
    name: "Kyrgyzstani Som",
    symbol: "сом",
    exponent: 2,
    locale: "ky_KG",
};

/// Cambodian Riel.
pub static KHR: CurrencyConfig = CurrencyConfig {
    code: "KHR",
    name: "Cambodian Riel",
    symbol: "៛",
    exponent: 2,
    locale: "km_KH",
};

/// South Korean Won.
pub static KRW: CurrencyConfig = CurrencyConfig {
    code: "KRW",
    name: "South Korean Won",
    symbol: "₩",
    exponent: 0,
    locale: "ko_KR",
};

/// Kuwaiti Dinar.
pub static KWD: CurrencyConfig = CurrencyConfig {
    code: "KWD",
    name: "Kuwaiti Dinar",
    symbol: "KD",
    exponent: 3,
    locale: "ar_KW",
};

/// Kazakhstani Tenge.
pub static KZT: CurrencyConfig = CurrencyConfig {
    code: "KZT",
    name: "Kazakhstani Tenge",
    symbol: "₸",
    exponent: 2,
    locale: "kk_KZ",
};

/// Lao Kip.
pub static LAK: CurrencyConfig = CurrencyConfig {
    code: "LAK",
    name: "Lao Kip",
    symbol: "₭",
    exponent: 2,
    locale: "lo_LA",
};

/// Lebanese Pound.
pub static LBP: CurrencyConfig = CurrencyConfig {
    code: "LBP",
    name: "Lebanese Pound",
    symbol: "L£",
    exponent: 2,
    locale: "ar_LB",
};

/// Sri Lankan Rupee.
pub static LKR: CurrencyConfig = CurrencyConfig {
    code: "LKR",
    name: "Sri Lankan Rupee",
    symbol: "Rs",
    exponent: 2,
    locale: "si_LK",
};

/// Myanmar Kyat.
pub static MMK: CurrencyConfig = CurrencyConfig {
    code: "MMK",
    name: "Myanmar Kyat",
    symbol: "K",
    exponent: 2,
    locale: "my_MM",
};

/// Mongolian Tögrög.
pub static MNT: CurrencyConfig = CurrencyConfig {
    code: "MNT",
    name: "Mongolian Tögrög",
    symbol: "₮",
    exponent: 2,
    locale: "mn_MN",
};

/// Macanese Pataca.
pub static MOP: CurrencyConfig = CurrencyConfig {
    code: "MOP",
    name: "Macanese Pataca",
    symbol: "MOP$",
    exponent: 2,
    locale: "zh_MO",
};

/// Maldivian Rufiyaa.
pub static MVR: CurrencyConfig = CurrencyConfig {
    code: "MVR",
    name: "Maldivian Rufiyaa",
    symbol: "Rf",
    exponent: 2,
    locale: "en_MV",
};

/// Malaysian Ringgit.
pub static MYR: CurrencyConfig = CurrencyConfig {
    code: "MYR",
    name: "Malaysian Ringgit",
    symbol: "RM",
    exponent: 2,
    locale: "ms_MY",
};

/// Nepalese Rupee.
pub static NPR: CurrencyConfig = CurrencyConfig {
    code: "NPR",
    name: "Nepalese Rupee",
    symbol: "रू",
    exponent: 2,
    locale: "ne_NP",
};

/// Omani Rial.
pub static OMR: CurrencyConfig = CurrencyConfig {
    code: "OMR",
    name: "Omani Rial",
    symbol: "RO",
    exponent: 3,
    locale: "ar_OM",
};

/// Philippine Peso.
pub static PHP: CurrencyConfig = CurrencyConfig {
    code: "PHP",
    name: "Philippine Peso",
    symbol: "₱",
    exponent: 2,
    locale: "en_PH",
};

/// Pakistani Rupee.
pub static PKR: CurrencyConfig = CurrencyConfig {
    code: "PKR",
    name: "Pakistani Rupee",
    symbol: "Rs",
    exponent: 2,
    locale: "ur_PK",
};

/// Qatari Riyal.
pub static QAR: CurrencyConfig = CurrencyConfig {
    code: "QAR",
    name: "Qatari Riyal",
    symbol: "QR",
    exponent: 2,
    locale: "ar_QA",
};

/// Saudi Riyal.
pub static SAR: CurrencyConfig = CurrencyConfig {
    code: "SAR",
    name: "Saudi Riyal",
    symbol: "SR",
    exponent: 2,
    locale: "ar_SA",
};

/// Singapore Dollar.
pub static SGD: CurrencyConfig = CurrencyConfig {
    code: "SGD",
    name: "Singapore Dollar",
    symbol: "S$",
    exponent: 2,
    locale: "en_SG",
};

/// Thai Baht.
pub static THB: CurrencyConfig = CurrencyConfig {
    code: "THB",
    name: "Thai Baht",
    symbol: "฿",
    exponent: 2,
    locale: "th_TH",
};

/// Tajikistani Somoni.
pub static TJS: CurrencyConfig = CurrencyConfig {
    code: "TJS",
    name: "Tajikistani Somoni",
    symbol: "SM",
    exponent: 2,
    locale: "tg_TJ",
};

/// New Taiwan Dollar.
///
/// Charged as a two-decimal amount; payouts must be whole dollars
/// (minor amount divisible by 100).
pub static TWD: CurrencyConfig = CurrencyConfig {
    code: "TWD",
    name: "New Taiwan Dollar",
    symbol: "NT$",
    exponent: 2,
    locale: "zh_TW",
};

/// Uzbekistani Som.
pub static UZS: CurrencyConfig = CurrencyConfig {
    code: "UZS",
    name: "Uzbekistani Som",
    symbol: "soʻm",
    exponent: 2,
    locale: "uz_UZ",
};

/// Vietnamese Đồng.
pub static VND: CurrencyConfig = CurrencyConfig {
    code: "VND",
    name: "Vietnamese Đồng",
    symbol: "₫",
    exponent: 0,
    locale: "vi_VN",
};

/// Yemeni Rial.
pub static YER: CurrencyConfig = CurrencyConfig {
    code: "YER",
    name: "Yemeni Rial",
    symbol: "YR",
    exponent: 2,
    locale: "ar_YE",
};
