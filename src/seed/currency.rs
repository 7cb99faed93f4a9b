//! Currency reference data

/// One row of the global currency table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencySeed {
    pub name: &'static str,
    pub country: &'static str,
    pub currency_code: &'static str,
    pub symbol: &'static str,
    pub emoji: &'static str,
    pub iso_3166_alpha2: &'static str,
    pub iso_3166_alpha3: &'static str,
    pub iso_3166_numeric: &'static str,
    pub phone_code: &'static str,
    pub domain: &'static str,
    pub locale: &'static str,
}

impl CurrencySeed {
    #[allow(clippy::too_many_arguments)]
    const fn new(
        name: &'static str,
        country: &'static str,
        currency_code: &'static str,
        symbol: &'static str,
        emoji: &'static str,
        iso_3166_alpha2: &'static str,
        iso_3166_alpha3: &'static str,
        iso_3166_numeric: &'static str,
        phone_code: &'static str,
        domain: &'static str,
        locale: &'static str,
    ) -> Self {
        Self {
            name,
            country,
            currency_code,
            symbol,
            emoji,
            iso_3166_alpha2,
            iso_3166_alpha3,
            iso_3166_numeric,
            phone_code,
            domain,
            locale,
        }
    }
}

/// Currencies seeded globally, one row per ISO 4217 code
#[rustfmt::skip]
pub static CURRENCIES: &[CurrencySeed] = &[
    CurrencySeed::new("US Dollar", "United States", "USD", "US$", "🇺🇸", "US", "USA", "840", "+1", ".us", "en_US"),
    CurrencySeed::new("Euro", "European Union", "EUR", "€", "🇪🇺", "EU", "EUR", "978", "", ".eu", "en_EU"),
    CurrencySeed::new("Japanese Yen", "Japan", "JPY", "¥", "🇯🇵", "JP", "JPN", "392", "+81", ".jp", "ja_JP"),
    CurrencySeed::new("British Pound Sterling", "United Kingdom", "GBP", "£", "🇬🇧", "GB", "GBR", "826", "+44", ".uk", "en_GB"),
    CurrencySeed::new("Australian Dollar", "Australia", "AUD", "AU$", "🇦🇺", "AU", "AUS", "036", "+61", ".au", "en_AU"),
    CurrencySeed::new("Canadian Dollar", "Canada", "CAD", "CA$", "🇨🇦", "CA", "CAN", "124", "+1", ".ca", "en_CA"),
    CurrencySeed::new("Swiss Franc", "Switzerland", "CHF", "Fr", "🇨🇭", "CH", "CHE", "756", "+41", ".ch", "de_CH"),
    CurrencySeed::new("Chinese Yuan", "China", "CNY", "CN¥", "🇨🇳", "CN", "CHN", "156", "+86", ".cn", "zh_CN"),
    CurrencySeed::new("Swedish Krona", "Sweden", "SEK", "kr", "🇸🇪", "SE", "SWE", "752", "+46", ".se", "sv_SE"),
    CurrencySeed::new("New Zealand Dollar", "New Zealand", "NZD", "NZ$", "🇳🇿", "NZ", "NZL", "554", "+64", ".nz", "en_NZ"),
    CurrencySeed::new("Philippine Peso", "Philippines", "PHP", "₱", "🇵🇭", "PH", "PHL", "608", "+63", ".ph", "en_PH"),
    CurrencySeed::new("Indian Rupee", "India", "INR", "₹", "🇮🇳", "IN", "IND", "356", "+91", ".in", "hi_IN"),
    CurrencySeed::new("South Korean Won", "South Korea", "KRW", "₩", "🇰🇷", "KR", "KOR", "410", "+82", ".kr", "ko_KR"),
    CurrencySeed::new("Thai Baht", "Thailand", "THB", "฿", "🇹🇭", "TH", "THA", "764", "+66", ".th", "th_TH"),
    CurrencySeed::new("Singapore Dollar", "Singapore", "SGD", "S$", "🇸🇬", "SG", "SGP", "702", "+65", ".sg", "en_SG"),
    CurrencySeed::new("Hong Kong Dollar", "Hong Kong", "HKD", "HK$", "🇭🇰", "HK", "HKG", "344", "+852", ".hk", "zh_HK"),
    CurrencySeed::new("Malaysian Ringgit", "Malaysia", "MYR", "RM", "🇲🇾", "MY", "MYS", "458", "+60", ".my", "ms_MY"),
    CurrencySeed::new("Indonesian Rupiah", "Indonesia", "IDR", "Rp", "🇮🇩", "ID", "IDN", "360", "+62", ".id", "id_ID"),
    CurrencySeed::new("Vietnamese Dong", "Vietnam", "VND", "₫", "🇻🇳", "VN", "VNM", "704", "+84", ".vn", "vi_VN"),
    CurrencySeed::new("Taiwan Dollar", "Taiwan", "TWD", "NT$", "🇹🇼", "TW", "TWN", "158", "+886", ".tw", "zh_TW"),
    CurrencySeed::new("Brunei Dollar", "Brunei", "BND", "B$", "🇧🇳", "BN", "BRN", "096", "+673", ".bn", "ms_BN"),
    CurrencySeed::new("Saudi Riyal", "Saudi Arabia", "SAR", "ر.س", "🇸🇦", "SA", "SAU", "682", "+966", ".sa", "ar_SA"),
    CurrencySeed::new("UAE Dirham", "United Arab Emirates", "AED", "د.إ", "🇦🇪", "AE", "ARE", "784", "+971", ".ae", "ar_AE"),
    CurrencySeed::new("Israeli New Shekel", "Israel", "ILS", "₪", "🇮🇱", "IL", "ISR", "376", "+972", ".il", "he_IL"),
    CurrencySeed::new("South African Rand", "South Africa", "ZAR", "R", "🇿🇦", "ZA", "ZAF", "710", "+27", ".za", "af_ZA"),
    CurrencySeed::new("Egyptian Pound", "Egypt", "EGP", "ج.م", "🇪🇬", "EG", "EGY", "818", "+20", ".eg", "ar_EG"),
    CurrencySeed::new("Turkish Lira", "Turkey", "TRY", "₺", "🇹🇷", "TR", "TUR", "792", "+90", ".tr", "tr_TR"),
    CurrencySeed::new("West African CFA Franc", "West African States", "XOF", "CFA", "🌍", "", "", "952", "", "", "fr_FR"),
    CurrencySeed::new("Central African CFA Franc", "Central African States", "XAF", "CFA", "🌍", "", "", "950", "", "", "fr_FR"),
    CurrencySeed::new("Mauritian Rupee", "Mauritius", "MUR", "₨", "🇲🇺", "MU", "MUS", "480", "+230", ".mu", "en_MU"),
    CurrencySeed::new("Maldivian Rufiyaa", "Maldives", "MVR", "Rf", "🇲🇻", "MV", "MDV", "462", "+960", ".mv", "dv_MV"),
    CurrencySeed::new("Norwegian Krone", "Norway", "NOK", "kr", "🇳🇴", "NO", "NOR", "578", "+47", ".no", "nb_NO"),
    CurrencySeed::new("Danish Krone", "Denmark", "DKK", "kr", "🇩🇰", "DK", "DNK", "208", "+45", ".dk", "da_DK"),
    CurrencySeed::new("Polish Zloty", "Poland", "PLN", "zł", "🇵🇱", "PL", "POL", "616", "+48", ".pl", "pl_PL"),
    CurrencySeed::new("Czech Koruna", "Czech Republic", "CZK", "Kč", "🇨🇿", "CZ", "CZE", "203", "+420", ".cz", "cs_CZ"),
    CurrencySeed::new("Hungarian Forint", "Hungary", "HUF", "Ft", "🇭🇺", "HU", "HUN", "348", "+36", ".hu", "hu_HU"),
    CurrencySeed::new("Russian Ruble", "Russia", "RUB", "₽", "🇷🇺", "RU", "RUS", "643", "+7", ".ru", "ru_RU"),
    CurrencySeed::new("Brazilian Real", "Brazil", "BRL", "R$", "🇧🇷", "BR", "BRA", "076", "+55", ".br", "pt_BR"),
    CurrencySeed::new("Mexican Peso", "Mexico", "MXN", "MX$", "🇲🇽", "MX", "MEX", "484", "+52", ".mx", "es_MX"),
    CurrencySeed::new("Argentine Peso", "Argentina", "ARS", "AR$", "🇦🇷", "AR", "ARG", "032", "+54", ".ar", "es_AR"),
    CurrencySeed::new("Chilean Peso", "Chile", "CLP", "CL$", "🇨🇱", "CL", "CHL", "152", "+56", ".cl", "es_CL"),
    CurrencySeed::new("Colombian Peso", "Colombia", "COP", "CO$", "🇨🇴", "CO", "COL", "170", "+57", ".co", "es_CO"),
    CurrencySeed::new("Peruvian Sol", "Peru", "PEN", "S/", "🇵🇪", "PE", "PER", "604", "+51", ".pe", "es_PE"),
    CurrencySeed::new("Uruguayan Peso", "Uruguay", "UYU", "$U", "🇺🇾", "UY", "URY", "858", "+598", ".uy", "es_UY"),
    CurrencySeed::new("Dominican Peso", "Dominican Republic", "DOP", "RD$", "🇩🇴", "DO", "DOM", "214", "+1", ".do", "es_DO"),
    CurrencySeed::new("Paraguayan Guarani", "Paraguay", "PYG", "₲", "🇵🇾", "PY", "PRY", "600", "+595", ".py", "es_PY"),
    CurrencySeed::new("Bolivian Boliviano", "Bolivia", "BOB", "Bs", "🇧🇴", "BO", "BOL", "068", "+591", ".bo", "es_BO"),
    CurrencySeed::new("Venezuelan Bolívar", "Venezuela", "VES", "Bs.S", "🇻🇪", "VE", "VEN", "928", "+58", ".ve", "es_VE"),
    CurrencySeed::new("Pakistani Rupee", "Pakistan", "PKR", "₨", "🇵🇰", "PK", "PAK", "586", "+92", ".pk", "ur_PK"),
    CurrencySeed::new("Bangladeshi Taka", "Bangladesh", "BDT", "৳", "🇧🇩", "BD", "BGD", "050", "+880", ".bd", "bn_BD"),
    CurrencySeed::new("Sri Lankan Rupee", "Sri Lanka", "LKR", "Rs", "🇱🇰", "LK", "LKA", "144", "+94", ".lk", "si_LK"),
    CurrencySeed::new("Nepalese Rupee", "Nepal", "NPR", "Rs", "🇳🇵", "NP", "NPL", "524", "+977", ".np", "ne_NP"),
    CurrencySeed::new("Myanmar Kyat", "Myanmar", "MMK", "K", "🇲🇲", "MM", "MMR", "104", "+95", ".mm", "my_MM"),
    CurrencySeed::new("Cambodian Riel", "Cambodia", "KHR", "៛", "🇰🇭", "KH", "KHM", "116", "+855", ".kh", "km_KH"),
    CurrencySeed::new("Laotian Kip", "Laos", "LAK", "₭", "🇱🇦", "LA", "LAO", "418", "+856", ".la", "lo_LA"),
    CurrencySeed::new("Nigerian Naira", "Nigeria", "NGN", "₦", "🇳🇬", "NG", "NGA", "566", "+234", ".ng", "en_NG"),
    CurrencySeed::new("Kenyan Shilling", "Kenya", "KES", "KSh", "🇰🇪", "KE", "KEN", "404", "+254", ".ke", "sw_KE"),
    CurrencySeed::new("Ghanaian Cedi", "Ghana", "GHS", "₵", "🇬🇭", "GH", "GHA", "288", "+233", ".gh", "en_GH"),
    CurrencySeed::new("Moroccan Dirham", "Morocco", "MAD", "د.م.", "🇲🇦", "MA", "MAR", "504", "+212", ".ma", "ar_MA"),
    CurrencySeed::new("Tunisian Dinar", "Tunisia", "TND", "د.ت", "🇹🇳", "TN", "TUN", "788", "+216", ".tn", "ar_TN"),
    CurrencySeed::new("Ethiopian Birr", "Ethiopia", "ETB", "Br", "🇪🇹", "ET", "ETH", "230", "+251", ".et", "am_ET"),
    CurrencySeed::new("Algerian Dinar", "Algeria", "DZD", "د.ج", "🇩🇿", "DZ", "DZA", "012", "+213", ".dz", "ar_DZ"),
    CurrencySeed::new("Ukrainian Hryvnia", "Ukraine", "UAH", "₴", "🇺🇦", "UA", "UKR", "804", "+380", ".ua", "uk_UA"),
    CurrencySeed::new("Romanian Leu", "Romania", "RON", "lei", "🇷🇴", "RO", "ROU", "642", "+40", ".ro", "ro_RO"),
    CurrencySeed::new("Bulgarian Lev", "Bulgaria", "BGN", "лв", "🇧🇬", "BG", "BGR", "100", "+359", ".bg", "bg_BG"),
    CurrencySeed::new("Serbian Dinar", "Serbia", "RSD", "дин", "🇷🇸", "RS", "SRB", "941", "+381", ".rs", "sr_RS"),
    CurrencySeed::new("Icelandic Krona", "Iceland", "ISK", "kr", "🇮🇸", "IS", "ISL", "352", "+354", ".is", "is_IS"),
    CurrencySeed::new("Belarusian Ruble", "Belarus", "BYN", "Br", "🇧🇾", "BY", "BLR", "933", "+375", ".by", "be_BY"),
    CurrencySeed::new("Fijian Dollar", "Fiji", "FJD", "FJ$", "🇫🇯", "FJ", "FJI", "242", "+679", ".fj", "en_FJ"),
    CurrencySeed::new("Papua New Guinea Kina", "Papua New Guinea", "PGK", "K", "🇵🇬", "PG", "PNG", "598", "+675", ".pg", "en_PG"),
    CurrencySeed::new("Jamaican Dollar", "Jamaica", "JMD", "J$", "🇯🇲", "JM", "JAM", "388", "+1", ".jm", "en_JM"),
    CurrencySeed::new("Costa Rican Colon", "Costa Rica", "CRC", "₡", "🇨🇷", "CR", "CRI", "188", "+506", ".cr", "es_CR"),
    CurrencySeed::new("Guatemalan Quetzal", "Guatemala", "GTQ", "Q", "🇬🇹", "GT", "GTM", "320", "+502", ".gt", "es_GT"),
    CurrencySeed::new("Special Drawing Rights", "IMF", "XDR", "SDR", "🏦", "", "", "960", "", "", "en_US"),
    CurrencySeed::new("Kuwaiti Dinar", "Kuwait", "KWD", "د.ك", "🇰🇼", "KW", "KWT", "414", "+965", ".kw", "ar_KW"),
    CurrencySeed::new("Qatari Riyal", "Qatar", "QAR", "ر.ق", "🇶🇦", "QA", "QAT", "634", "+974", ".qa", "ar_QA"),
    CurrencySeed::new("Omani Rial", "Oman", "OMR", "ر.ع", "🇴🇲", "OM", "OMN", "512", "+968", ".om", "ar_OM"),
    CurrencySeed::new("Bahraini Dinar", "Bahrain", "BHD", "ب.د", "🇧🇭", "BH", "BHR", "048", "+973", ".bh", "ar_BH"),
    CurrencySeed::new("Jordanian Dinar", "Jordan", "JOD", "د.ا", "🇯🇴", "JO", "JOR", "400", "+962", ".jo", "ar_JO"),
    CurrencySeed::new("Kazakhstani Tenge", "Kazakhstan", "KZT", "₸", "🇰🇿", "KZ", "KAZ", "398", "+7", ".kz", "kk_KZ"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<_> = CURRENCIES.iter().map(|c| c.currency_code).collect();
        assert_eq!(codes.len(), CURRENCIES.len());
    }

    #[test]
    fn test_default_currency_is_present() {
        let php = CURRENCIES
            .iter()
            .find(|c| c.currency_code == crate::managers::DEFAULT_CURRENCY_CODE)
            .unwrap();
        assert_eq!(php.iso_3166_alpha3, "PHL");
        assert_eq!(php.symbol, "₱");
    }

    #[test]
    fn test_codes_are_three_uppercase_letters() {
        for c in CURRENCIES {
            assert_eq!(c.currency_code.len(), 3, "{}", c.name);
            assert!(c.currency_code.chars().all(|ch| ch.is_ascii_uppercase()));
        }
    }
}
