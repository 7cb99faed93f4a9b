//! Bill and coin denominations per currency
//!
//! Keyed by the ISO 3166 alpha-3 code of the currency row. Currencies shared
//! by several countries (the CFA francs) carry no alpha-3 code and are keyed
//! by their ISO 4217 code instead. Values are in thousandths of the currency
//! unit, since the dinar currencies have fils coins below one hundredth.

use rust_decimal::Decimal;

pub type Denomination = (&'static str, i64);

/// Value of a denomination as a decimal
pub fn denomination_value(thousandths: i64) -> Decimal {
    Decimal::new(thousandths, 3)
}

/// Denominations stored under `key`
pub fn denominations_for(key: &str) -> Option<&'static [Denomination]> {
    if key.is_empty() {
        return None;
    }
    DENOMINATIONS
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(key))
        .map(|(_, table)| *table)
}

/// Denominations of a currency row: by alpha-3 first, then by currency code
pub fn denominations_for_currency(
    iso_3166_alpha3: &str,
    currency_code: &str,
) -> Option<&'static [Denomination]> {
    denominations_for(iso_3166_alpha3).or_else(|| denominations_for(currency_code))
}

#[rustfmt::skip]
pub static DENOMINATIONS: &[(&str, &[Denomination])] = &[
    (
        "PHL",
        &[
            ("₱ 1000 Bill", 1000000),
            ("₱ 500 Bill", 500000),
            ("₱ 200 Bill", 200000),
            ("₱ 100 Bill", 100000),
            ("₱ 50 Bill", 50000),
            ("₱ 20 Bill", 20000),
            ("₱ 20 Coin", 20000),
            ("₱ 10 Coin", 10000),
            ("₱ 5 Coin", 5000),
            ("₱ 1 Coin", 1000),
            ("₱ 0.25 Sentimo Coin", 250),
            ("₱ 0.05 Sentimo Coin", 50),
            ("₱ 0.1 Sentimo Coin", 10),
        ],
    ),
    (
        "USA",
        &[
            ("US$ 100 Bill", 100000),
            ("US$ 50 Bill", 50000),
            ("US$ 20 Bill", 20000),
            ("US$ 10 Bill", 10000),
            ("US$ 5 Bill", 5000),
            ("US$ 2 Bill", 2000),
            ("US$ 1 Bill", 1000),
            ("US$ 1 Coin", 1000),
            ("US$ 0.50 Half Dollar Coin", 500),
            ("US$ 0.25 Quarter Coin", 250),
            ("US$ 0.10 Dime Coin", 100),
            ("US$ 0.05 Nickel Coin", 50),
            ("US$ 0.01 Penny Coin", 10),
        ],
    ),
    (
        "EUR",
        &[
            ("€500 Banknote", 500000),
            ("€200 Banknote", 200000),
            ("€100 Banknote", 100000),
            ("€50 Banknote", 50000),
            ("€20 Banknote", 20000),
            ("€10 Banknote", 10000),
            ("€5 Banknote", 5000),
            ("€2 Coin", 2000),
            ("€1 Coin", 1000),
            ("€0.50 Coin", 500),
            ("€0.20 Coin", 200),
            ("€0.10 Coin", 100),
            ("€0.05 Coin", 50),
            ("€0.02 Coin", 20),
            ("€0.01 Coin", 10),
        ],
    ),
    (
        "JPN",
        &[
            ("JPY ¥10,000 Banknote", 10000000),
            ("JPY ¥5,000 Banknote", 5000000),
            ("JPY ¥2,000 Banknote", 2000000),
            ("JPY ¥1,000 Banknote", 1000000),
            ("JPY ¥500 Coin", 500000),
            ("JPY ¥100 Coin", 100000),
            ("JPY ¥50 Coin", 50000),
            ("JPY ¥10 Coin", 10000),
            ("JPY ¥5 Coin", 5000),
            ("JPY ¥1 Coin", 1000),
        ],
    ),
    (
        "GBR",
        &[
            ("£50 Banknote", 50000),
            ("£20 Banknote", 20000),
            ("£10 Banknote", 10000),
            ("£5 Banknote", 5000),
            ("£2 Coin", 2000),
            ("£1 Coin", 1000),
            ("50p Coin", 500),
            ("20p Coin", 200),
            ("10p Coin", 100),
            ("5p Coin", 50),
            ("2p Coin", 20),
            ("1p Coin", 10),
        ],
    ),
    (
        "AUS",
        &[
            ("A$100 Banknote", 100000),
            ("A$50 Banknote", 50000),
            ("A$20 Banknote", 20000),
            ("A$10 Banknote", 10000),
            ("A$5 Banknote", 5000),
            ("A$2 Coin", 2000),
            ("A$1 Coin", 1000),
            ("AUD 50c Coin", 500),
            ("AUD 20c Coin", 200),
            ("AUD 10c Coin", 100),
            ("AUD 5c Coin", 50),
        ],
    ),
    (
        "CAN",
        &[
            ("C$100 Banknote", 100000),
            ("C$50 Banknote", 50000),
            ("C$20 Banknote", 20000),
            ("C$10 Banknote", 10000),
            ("C$5 Banknote", 5000),
            ("C$2 Coin (Toonie)", 2000),
            ("C$1 Coin (Loonie)", 1000),
            ("25¢ Coin (Quarter)", 250),
            ("10¢ Coin (Dime)", 100),
            ("5¢ Coin (Nickel)", 50),
        ],
    ),
    (
        "CHE",
        &[
            ("CHF 1000 Banknote", 1000000),
            ("CHF 200 Banknote", 200000),
            ("CHF 100 Banknote", 100000),
            ("CHF 50 Banknote", 50000),
            ("CHF 20 Banknote", 20000),
            ("CHF 10 Banknote", 10000),
            ("CHF 5 Coin", 5000),
            ("CHF 2 Coin", 2000),
            ("CHF 1 Coin", 1000),
            ("CHF 50 Rappen Coin", 500),
            ("CHF 20 Rappen Coin", 200),
            ("10 Rappen Coin", 100),
            ("5 Rappen Coin", 50),
        ],
    ),
    (
        "CHN",
        &[
            ("CNY ¥100 Banknote", 100000),
            ("CNY ¥50 Banknote", 50000),
            ("CNY ¥20 Banknote", 20000),
            ("CNY ¥10 Banknote", 10000),
            ("CNY ¥5 Banknote", 5000),
            ("CNY ¥1 Banknote", 1000),
            ("CNY ¥1 Coin", 1000),
            ("CNY 5 Jiao Coin", 500),
            ("CNY 1 Jiao Coin", 100),
            ("CNY 5 Fen Coin", 50),
            ("CNY 1 Fen Coin", 10),
        ],
    ),
    (
        "SWE",
        &[
            ("SEK 1000 Banknote", 1000000),
            ("SEK 500 Banknote", 500000),
            ("SEK 200 Banknote", 200000),
            ("SEK 100 Banknote", 100000),
            ("SEK 50 Banknote", 50000),
            ("SEK 20 Banknote", 20000),
            ("SEK 10 Coin", 10000),
            ("SEK 5 Coin", 5000),
            ("SEK 2 Coin", 2000),
            ("SEK 1 Coin", 1000),
        ],
    ),
    (
        "NZL",
        &[
            ("NZ$100 Banknote", 100000),
            ("NZ$50 Banknote", 50000),
            ("NZ$20 Banknote", 20000),
            ("NZ$10 Banknote", 10000),
            ("NZ$5 Banknote", 5000),
            ("NZ$2 Coin", 2000),
            ("NZ$1 Coin", 1000),
            ("NZD 50c Coin", 500),
            ("NZD 20c Coin", 200),
            ("NZD 10c Coin", 100),
        ],
    ),
    (
        "IND",
        &[
            ("₹2000 Banknote", 2000000),
            ("₹500 Banknote", 500000),
            ("₹200 Banknote", 200000),
            ("₹100 Banknote", 100000),
            ("₹50 Banknote", 50000),
            ("₹20 Banknote", 20000),
            ("₹10 Banknote", 10000),
            ("₹20 Coin", 20000),
            ("₹10 Coin", 10000),
            ("₹5 Coin", 5000),
            ("₹2 Coin", 2000),
            ("₹1 Coin", 1000),
        ],
    ),
    (
        "KOR",
        &[
            ("₩50,000 Banknote", 50000000),
            ("₩10,000 Banknote", 10000000),
            ("₩5,000 Banknote", 5000000),
            ("₩1,000 Banknote", 1000000),
            ("₩500 Coin", 500000),
            ("₩100 Coin", 100000),
            ("₩50 Coin", 50000),
            ("₩10 Coin", 10000),
        ],
    ),
    (
        "THA",
        &[
            ("฿1000 Banknote", 1000000),
            ("฿500 Banknote", 500000),
            ("฿100 Banknote", 100000),
            ("฿50 Banknote", 50000),
            ("฿20 Banknote", 20000),
            ("฿10 Coin", 10000),
            ("฿5 Coin", 5000),
            ("฿2 Coin", 2000),
            ("฿1 Coin", 1000),
            ("THB 50 Satang Coin", 500),
            ("THB 25 Satang Coin", 250),
        ],
    ),
    (
        "SGP",
        &[
            ("S$1000 Banknote", 1000000),
            ("S$100 Banknote", 100000),
            ("S$50 Banknote", 50000),
            ("S$10 Banknote", 10000),
            ("S$5 Banknote", 5000),
            ("S$2 Banknote", 2000),
            ("S$1 Coin", 1000),
            ("SGD 50¢ Coin", 500),
            ("SGD 20¢ Coin", 200),
            ("SGD 10¢ Coin", 100),
            ("SGD 5¢ Coin", 50),
        ],
    ),
    (
        "HKG",
        &[
            ("HK$1000 Banknote", 1000000),
            ("HK$500 Banknote", 500000),
            ("HK$100 Banknote", 100000),
            ("HK$50 Banknote", 50000),
            ("HK$20 Banknote", 20000),
            ("HK$10 Banknote", 10000),
            ("HK$10 Coin", 10000),
            ("HK$5 Coin", 5000),
            ("HK$2 Coin", 2000),
            ("HK$1 Coin", 1000),
            ("HKD 50¢ Coin", 500),
            ("HKD 20¢ Coin", 200),
            ("HKD 10¢ Coin", 100),
        ],
    ),
    (
        "MYS",
        &[
            ("RM100 Banknote", 100000),
            ("RM50 Banknote", 50000),
            ("RM20 Banknote", 20000),
            ("RM10 Banknote", 10000),
            ("RM5 Banknote", 5000),
            ("RM1 Banknote", 1000),
            ("RM1 Coin", 1000),
            ("MYR 50 Sen Coin", 500),
            ("MYR 20 Sen Coin", 200),
            ("MYR 10 Sen Coin", 100),
            ("MYR 5 Sen Coin", 50),
        ],
    ),
    (
        "IDN",
        &[
            ("Rp100,000 Banknote", 100000000),
            ("Rp50,000 Banknote", 50000000),
            ("Rp20,000 Banknote", 20000000),
            ("Rp10,000 Banknote", 10000000),
            ("Rp5,000 Banknote", 5000000),
            ("Rp2,000 Banknote", 2000000),
            ("Rp1,000 Banknote", 1000000),
            ("Rp1,000 Coin", 1000000),
            ("Rp500 Coin", 500000),
            ("Rp200 Coin", 200000),
            ("Rp100 Coin", 100000),
        ],
    ),
    (
        "VNM",
        &[
            ("₫500,000 Banknote", 500000000),
            ("₫200,000 Banknote", 200000000),
            ("₫100,000 Banknote", 100000000),
            ("₫50,000 Banknote", 50000000),
            ("₫20,000 Banknote", 20000000),
            ("₫10,000 Banknote", 10000000),
            ("₫5,000 Coin", 5000000),
            ("₫2,000 Coin", 2000000),
            ("₫1,000 Coin", 1000000),
            ("₫500 Coin", 500000),
        ],
    ),
    (
        "TWN",
        &[
            ("NT$2000 Banknote", 2000000),
            ("NT$1000 Banknote", 1000000),
            ("NT$500 Banknote", 500000),
            ("NT$200 Banknote", 200000),
            ("NT$100 Banknote", 100000),
            ("NT$50 Coin", 50000),
            ("NT$10 Coin", 10000),
            ("NT$5 Coin", 5000),
            ("NT$1 Coin", 1000),
        ],
    ),
    (
        "BRN",
        &[
            ("B$10,000 Banknote", 10000000),
            ("B$1,000 Banknote", 1000000),
            ("B$100 Banknote", 100000),
            ("B$50 Banknote", 50000),
            ("B$25 Banknote", 25000),
            ("B$10 Banknote", 10000),
            ("B$5 Banknote", 5000),
            ("B$1 Banknote", 1000),
            ("B$1 Coin", 1000),
            ("BND 50 Sen Coin", 500),
            ("BND 20 Sen Coin", 200),
            ("BND 10 Sen Coin", 100),
            ("BND 5 Sen Coin", 50),
        ],
    ),
    (
        "SAU",
        &[
            ("ر.س 500 Banknote", 500000),
            ("ر.س 200 Banknote", 200000),
            ("ر.س 100 Banknote", 100000),
            ("ر.س 50 Banknote", 50000),
            ("ر.س 20 Banknote", 20000),
            ("ر.س 10 Banknote", 10000),
            ("ر.س 5 Banknote", 5000),
            ("ر.س 1 Banknote", 1000),
            ("ر.س 2 Coin", 2000),
            ("ر.س 1 Coin", 1000),
            ("50 Halala Coin", 500),
            ("25 Halala Coin", 250),
            ("10 Halala Coin", 100),
            ("5 Halala Coin", 50),
        ],
    ),
    (
        "ARE",
        &[
            ("د.إ 1000 Banknote", 1000000),
            ("د.إ 500 Banknote", 500000),
            ("د.إ 200 Banknote", 200000),
            ("د.إ 100 Banknote", 100000),
            ("د.إ 50 Banknote", 50000),
            ("د.إ 20 Banknote", 20000),
            ("د.إ 10 Banknote", 10000),
            ("د.إ 5 Banknote", 5000),
            ("د.إ 1 Coin", 1000),
            ("AED 50 Fils Coin", 500),
            ("AED 25 Fils Coin", 250),
            ("AED 10 Fils Coin", 100),
        ],
    ),
    (
        "ISR",
        &[
            ("₪200 Banknote", 200000),
            ("₪100 Banknote", 100000),
            ("₪50 Banknote", 50000),
            ("₪20 Banknote", 20000),
            ("₪10 Coin", 10000),
            ("₪5 Coin", 5000),
            ("₪2 Coin", 2000),
            ("₪1 Coin", 1000),
            ("50 Agorot Coin", 500),
            ("10 Agorot Coin", 100),
        ],
    ),
    (
        "ZAF",
        &[
            ("R200 Banknote", 200000),
            ("R100 Banknote", 100000),
            ("R50 Banknote", 50000),
            ("R20 Banknote", 20000),
            ("R10 Banknote", 10000),
            ("R5 Coin", 5000),
            ("R2 Coin", 2000),
            ("R1 Coin", 1000),
            ("ZAR 50c Coin", 500),
            ("ZAR 20c Coin", 200),
            ("ZAR 10c Coin", 100),
        ],
    ),
    (
        "EGY",
        &[
            ("ج.م 1000 Banknote", 1000000),
            ("ج.م 500 Banknote", 500000),
            ("ج.م 200 Banknote", 200000),
            ("ج.م 100 Banknote", 100000),
            ("ج.م 50 Banknote", 50000),
            ("ج.م 20 Banknote", 20000),
            ("ج.م 10 Banknote", 10000),
            ("ج.م 5 Banknote", 5000),
            ("ج.م 1 Coin", 1000),
            ("50 Piastres Coin", 500),
            ("25 Piastres Coin", 250),
            ("10 Piastres Coin", 100),
        ],
    ),
    (
        "TUR",
        &[
            ("₺200 Banknote", 200000),
            ("₺100 Banknote", 100000),
            ("₺50 Banknote", 50000),
            ("₺20 Banknote", 20000),
            ("₺10 Banknote", 10000),
            ("₺5 Banknote", 5000),
            ("₺1 Coin", 1000),
            ("50 Kuruş Coin", 500),
            ("25 Kuruş Coin", 250),
            ("10 Kuruş Coin", 100),
            ("5 Kuruş Coin", 50),
        ],
    ),
    (
        "XOF",
        &[
            ("XOF CFA 10,000 Banknote", 10000000),
            ("XOF CFA 5,000 Banknote", 5000000),
            ("XOF CFA 2,000 Banknote", 2000000),
            ("XOF CFA 1,000 Banknote", 1000000),
            ("XOF CFA 500 Banknote", 500000),
            ("XOF CFA 500 Coin", 500000),
            ("XOF CFA 250 Coin", 250000),
            ("XOF CFA 100 Coin", 100000),
            ("XOF CFA 50 Coin", 50000),
            ("XOF CFA 25 Coin", 25000),
            ("XOF CFA 10 Coin", 10000),
        ],
    ),
    (
        "XAF",
        &[
            ("XAF CFA 10,000 Banknote", 10000000),
            ("XAF CFA 5,000 Banknote", 5000000),
            ("XAF CFA 2,000 Banknote", 2000000),
            ("XAF CFA 1,000 Banknote", 1000000),
            ("XAF CFA 500 Banknote", 500000),
            ("XAF CFA 500 Coin", 500000),
            ("XAF CFA 100 Coin", 100000),
            ("XAF CFA 50 Coin", 50000),
            ("XAF CFA 25 Coin", 25000),
            ("XAF CFA 10 Coin", 10000),
            ("XAF CFA 5 Coin", 5000),
        ],
    ),
    (
        "MUS",
        &[
            ("MUR ₨2000 Banknote", 2000000),
            ("MUR ₨1000 Banknote", 1000000),
            ("MUR ₨500 Banknote", 500000),
            ("MUR ₨200 Banknote", 200000),
            ("MUR ₨100 Banknote", 100000),
            ("MUR ₨50 Banknote", 50000),
            ("MUR ₨25 Banknote", 25000),
            ("MUR ₨20 Coin", 20000),
            ("MUR ₨10 Coin", 10000),
            ("MUR ₨5 Coin", 5000),
            ("MUR ₨1 Coin", 1000),
            ("MUR 50 Cents Coin", 500),
            ("MUR 20 Cents Coin", 200),
        ],
    ),
    (
        "MDV",
        &[
            ("Rf1000 Banknote", 1000000),
            ("Rf500 Banknote", 500000),
            ("Rf100 Banknote", 100000),
            ("Rf50 Banknote", 50000),
            ("Rf20 Banknote", 20000),
            ("Rf10 Banknote", 10000),
            ("Rf5 Banknote", 5000),
            ("Rf2 Coin", 2000),
            ("Rf1 Coin", 1000),
            ("50 Laari Coin", 500),
            ("25 Laari Coin", 250),
            ("10 Laari Coin", 100),
        ],
    ),
    (
        "NOR",
        &[
            ("NOK 1000 kr Banknote", 1000000),
            ("NOK 500 kr Banknote", 500000),
            ("NOK 200 kr Banknote", 200000),
            ("NOK 100 kr Banknote", 100000),
            ("NOK 50 kr Banknote", 50000),
            ("NOK 20 kr Coin", 20000),
            ("NOK 10 kr Coin", 10000),
            ("NOK 5 kr Coin", 5000),
            ("NOK 1 kr Coin", 1000),
        ],
    ),
    (
        "DNK",
        &[
            ("DKK 1000 kr Banknote", 1000000),
            ("DKK 500 kr Banknote", 500000),
            ("DKK 200 kr Banknote", 200000),
            ("DKK 100 kr Banknote", 100000),
            ("DKK 50 kr Banknote", 50000),
            ("DKK 20 kr Coin", 20000),
            ("DKK 10 kr Coin", 10000),
            ("DKK 5 kr Coin", 5000),
            ("DKK 2 kr Coin", 2000),
            ("DKK 1 kr Coin", 1000),
            ("DKK 50 øre Coin", 500),
        ],
    ),
    (
        "POL",
        &[
            ("500 zł Banknote", 500000),
            ("200 zł Banknote", 200000),
            ("100 zł Banknote", 100000),
            ("50 zł Banknote", 50000),
            ("20 zł Banknote", 20000),
            ("10 zł Banknote", 10000),
            ("5 zł Coin", 5000),
            ("2 zł Coin", 2000),
            ("1 zł Coin", 1000),
            ("50 groszy Coin", 500),
            ("20 groszy Coin", 200),
            ("10 groszy Coin", 100),
            ("5 groszy Coin", 50),
            ("2 groszy Coin", 20),
            ("1 grosz Coin", 10),
        ],
    ),
    (
        "CZE",
        &[
            ("5000 Kč Banknote", 5000000),
            ("2000 Kč Banknote", 2000000),
            ("1000 Kč Banknote", 1000000),
            ("500 Kč Banknote", 500000),
            ("200 Kč Banknote", 200000),
            ("100 Kč Banknote", 100000),
            ("50 Kč Coin", 50000),
            ("20 Kč Coin", 20000),
            ("10 Kč Coin", 10000),
            ("5 Kč Coin", 5000),
            ("2 Kč Coin", 2000),
            ("1 Kč Coin", 1000),
        ],
    ),
    (
        "HUN",
        &[
            ("20,000 Ft Banknote", 20000000),
            ("10,000 Ft Banknote", 10000000),
            ("5,000 Ft Banknote", 5000000),
            ("2,000 Ft Banknote", 2000000),
            ("1,000 Ft Banknote", 1000000),
            ("500 Ft Banknote", 500000),
            ("200 Ft Coin", 200000),
            ("100 Ft Coin", 100000),
            ("50 Ft Coin", 50000),
            ("20 Ft Coin", 20000),
            ("10 Ft Coin", 10000),
            ("5 Ft Coin", 5000),
        ],
    ),
    (
        "RUS",
        &[
            ("₽5000 Banknote", 5000000),
            ("₽2000 Banknote", 2000000),
            ("₽1000 Banknote", 1000000),
            ("₽500 Banknote", 500000),
            ("₽200 Banknote", 200000),
            ("₽100 Banknote", 100000),
            ("₽50 Banknote", 50000),
            ("₽25 Coin", 25000),
            ("₽10 Coin", 10000),
            ("₽5 Coin", 5000),
            ("₽2 Coin", 2000),
            ("₽1 Coin", 1000),
            ("50 Kopecks Coin", 500),
            ("10 Kopecks Coin", 100),
            ("5 Kopecks Coin", 50),
            ("1 Kopeck Coin", 10),
        ],
    ),
    (
        "BRA",
        &[
            ("BRL R$200 Banknote", 200000),
            ("BRL R$100 Banknote", 100000),
            ("BRL R$50 Banknote", 50000),
            ("BRL R$20 Banknote", 20000),
            ("BRL R$10 Banknote", 10000),
            ("BRL R$5 Banknote", 5000),
            ("BRL R$2 Banknote", 2000),
            ("BRL R$1 Coin", 1000),
            ("BRL 50 Centavos Coin", 500),
            ("BRL 25 Centavos Coin", 250),
            ("BRL 10 Centavos Coin", 100),
            ("BRL 5 Centavos Coin", 50),
        ],
    ),
    (
        "MEX",
        &[
            ("MX$1000 Banknote", 1000000),
            ("MX$500 Banknote", 500000),
            ("MX$200 Banknote", 200000),
            ("MX$100 Banknote", 100000),
            ("MX$50 Banknote", 50000),
            ("MX$20 Banknote", 20000),
            ("MX$20 Coin", 20000),
            ("MX$10 Coin", 10000),
            ("MX$5 Coin", 5000),
            ("MX$2 Coin", 2000),
            ("MX$1 Coin", 1000),
            ("MXN 50 Centavos Coin", 500),
            ("MXN 20 Centavos Coin", 200),
            ("MXN 10 Centavos Coin", 100),
        ],
    ),
    (
        "ARG",
        &[
            ("AR$2000 Banknote", 2000000),
            ("AR$1000 Banknote", 1000000),
            ("AR$500 Banknote", 500000),
            ("AR$200 Banknote", 200000),
            ("AR$100 Banknote", 100000),
            ("AR$50 Banknote", 50000),
            ("AR$20 Banknote", 20000),
            ("AR$10 Coin", 10000),
            ("AR$5 Coin", 5000),
            ("AR$2 Coin", 2000),
            ("AR$1 Coin", 1000),
            ("ARS 50 Centavos Coin", 500),
            ("ARS 25 Centavos Coin", 250),
            ("ARS 10 Centavos Coin", 100),
        ],
    ),
    (
        "CHL",
        &[
            ("CL$20,000 Banknote", 20000000),
            ("CL$10,000 Banknote", 10000000),
            ("CL$5,000 Banknote", 5000000),
            ("CL$2,000 Banknote", 2000000),
            ("CL$1,000 Banknote", 1000000),
            ("CL$500 Coin", 500000),
            ("CL$100 Coin", 100000),
            ("CL$50 Coin", 50000),
            ("CL$10 Coin", 10000),
        ],
    ),
    (
        "COL",
        &[
            ("CO$100,000 Banknote", 100000000),
            ("CO$50,000 Banknote", 50000000),
            ("CO$20,000 Banknote", 20000000),
            ("CO$10,000 Banknote", 10000000),
            ("CO$5,000 Banknote", 5000000),
            ("CO$2,000 Banknote", 2000000),
            ("CO$1,000 Coin", 1000000),
            ("CO$500 Coin", 500000),
            ("CO$200 Coin", 200000),
            ("CO$100 Coin", 100000),
            ("CO$50 Coin", 50000),
        ],
    ),
    (
        "PER",
        &[
            ("S/200 Banknote", 200000),
            ("S/100 Banknote", 100000),
            ("S/50 Banknote", 50000),
            ("S/20 Banknote", 20000),
            ("S/10 Banknote", 10000),
            ("S/5 Coin", 5000),
            ("S/2 Coin", 2000),
            ("S/1 Coin", 1000),
            ("PEN 50 Céntimos Coin", 500),
            ("PEN 20 Céntimos Coin", 200),
            ("PEN 10 Céntimos Coin", 100),
        ],
    ),
    (
        "URY",
        &[
            ("$U2000 Banknote", 2000000),
            ("$U1000 Banknote", 1000000),
            ("$U500 Banknote", 500000),
            ("$U200 Banknote", 200000),
            ("$U100 Banknote", 100000),
            ("$U50 Banknote", 50000),
            ("$U20 Banknote", 20000),
            ("$U10 Coin", 10000),
            ("$U5 Coin", 5000),
            ("$U2 Coin", 2000),
            ("$U1 Coin", 1000),
            ("50 Centésimos Coin", 500),
        ],
    ),
    (
        "DOM",
        &[
            ("RD$2000 Banknote", 2000000),
            ("RD$1000 Banknote", 1000000),
            ("RD$500 Banknote", 500000),
            ("RD$200 Banknote", 200000),
            ("RD$100 Banknote", 100000),
            ("RD$50 Banknote", 50000),
            ("RD$20 Banknote", 20000),
            ("RD$25 Coin", 25000),
            ("RD$10 Coin", 10000),
            ("RD$5 Coin", 5000),
            ("RD$1 Coin", 1000),
            ("DOP 50 Centavos Coin", 500),
            ("DOP 25 Centavos Coin", 250),
        ],
    ),
    (
        "PRY",
        &[
            ("₲100,000 Banknote", 100000000),
            ("₲50,000 Banknote", 50000000),
            ("₲20,000 Banknote", 20000000),
            ("₲10,000 Banknote", 10000000),
            ("₲5,000 Banknote", 5000000),
            ("₲2,000 Banknote", 2000000),
            ("₲1,000 Coin", 1000000),
            ("₲500 Coin", 500000),
            ("₲100 Coin", 100000),
            ("₲50 Coin", 50000),
        ],
    ),
    (
        "BOL",
        &[
            ("Bs200 Banknote", 200000),
            ("Bs100 Banknote", 100000),
            ("Bs50 Banknote", 50000),
            ("Bs20 Banknote", 20000),
            ("Bs10 Banknote", 10000),
            ("Bs5 Coin", 5000),
            ("Bs2 Coin", 2000),
            ("Bs1 Coin", 1000),
            ("BOB 50 Centavos Coin", 500),
            ("BOB 20 Centavos Coin", 200),
            ("BOB 10 Centavos Coin", 100),
        ],
    ),
    (
        "VEN",
        &[
            ("Bs.S 1,000,000 Banknote", 1000000000),
            ("Bs.S 500,000 Banknote", 500000000),
            ("Bs.S 200,000 Banknote", 200000000),
            ("Bs.S 100,000 Banknote", 100000000),
            ("Bs.S 50,000 Banknote", 50000000),
            ("Bs.S 20,000 Banknote", 20000000),
            ("Bs.S 10,000 Banknote", 10000000),
            ("Bs.S 5,000 Banknote", 5000000),
            ("Bs.S 1 Coin", 1000),
            ("50 Céntimos Coin", 500),
            ("25 Céntimos Coin", 250),
            ("10 Céntimos Coin", 100),
        ],
    ),
    (
        "PAK",
        &[
            ("PKR ₨5000 Banknote", 5000000),
            ("PKR ₨1000 Banknote", 1000000),
            ("PKR ₨500 Banknote", 500000),
            ("PKR ₨100 Banknote", 100000),
            ("PKR ₨50 Banknote", 50000),
            ("PKR ₨20 Banknote", 20000),
            ("PKR ₨10 Banknote", 10000),
            ("PKR ₨5 Coin", 5000),
            ("PKR ₨2 Coin", 2000),
            ("PKR ₨1 Coin", 1000),
            ("PKR 50 Paisa Coin", 500),
        ],
    ),
    (
        "BGD",
        &[
            ("BDT ৳1000 Banknote", 1000000),
            ("BDT ৳500 Banknote", 500000),
            ("BDT ৳100 Banknote", 100000),
            ("BDT ৳50 Banknote", 50000),
            ("BDT ৳20 Banknote", 20000),
            ("BDT ৳10 Banknote", 10000),
            ("BDT ৳5 Banknote", 5000),
            ("BDT ৳2 Banknote", 2000),
            ("BDT ৳5 Coin", 5000),
            ("BDT ৳2 Coin", 2000),
            ("BDT ৳1 Coin", 1000),
            ("BDT 50 Paisa Coin", 500),
            ("BDT 25 Paisa Coin", 250),
        ],
    ),
    (
        "LKA",
        &[
            ("LKR Rs5000 Banknote", 5000000),
            ("LKR Rs2000 Banknote", 2000000),
            ("LKR Rs1000 Banknote", 1000000),
            ("LKR Rs500 Banknote", 500000),
            ("LKR Rs100 Banknote", 100000),
            ("LKR Rs50 Banknote", 50000),
            ("LKR Rs20 Banknote", 20000),
            ("LKR Rs10 Coin", 10000),
            ("LKR Rs5 Coin", 5000),
            ("LKR Rs2 Coin", 2000),
            ("LKR Rs1 Coin", 1000),
            ("LKR 50 Cents Coin", 500),
            ("LKR 25 Cents Coin", 250),
        ],
    ),
    (
        "NPL",
        &[
            ("NPR Rs1000 Banknote", 1000000),
            ("NPR Rs500 Banknote", 500000),
            ("NPR Rs100 Banknote", 100000),
            ("NPR Rs50 Banknote", 50000),
            ("NPR Rs20 Banknote", 20000),
            ("NPR Rs10 Banknote", 10000),
            ("NPR Rs5 Banknote", 5000),
            ("NPR Rs10 Coin", 10000),
            ("NPR Rs5 Coin", 5000),
            ("NPR Rs2 Coin", 2000),
            ("NPR Rs1 Coin", 1000),
            ("NPR 50 Paisa Coin", 500),
            ("NPR 25 Paisa Coin", 250),
        ],
    ),
    (
        "MMR",
        &[
            ("K10,000 PG Banknote", 10000000),
            ("K5,000 PG Banknote", 5000000),
            ("K1,000 PG Banknote", 1000000),
            ("K500 PG Banknote", 500000),
            ("K200 PG Banknote", 200000),
            ("K100 PG Banknote", 100000),
            ("K50 PG Banknote", 50000),
            ("K100 PG Coin", 100000),
            ("K50 PG Coin", 50000),
            ("K10 PG Coin", 10000),
            ("K5 PG Coin", 5000),
            ("K1 PG Coin", 1000),
        ],
    ),
    (
        "KHM",
        &[
            ("៛100,000 Banknote", 100000000),
            ("៛50,000 Banknote", 50000000),
            ("៛20,000 Banknote", 20000000),
            ("៛10,000 Banknote", 10000000),
            ("៛5,000 Banknote", 5000000),
            ("៛2,000 Banknote", 2000000),
            ("៛1,000 Banknote", 1000000),
            ("៛500 Banknote", 500000),
            ("៛500 Coin", 500000),
            ("៛200 Coin", 200000),
            ("៛100 Coin", 100000),
            ("៛50 Coin", 50000),
        ],
    ),
    (
        "LAO",
        &[
            ("₭100,000 Banknote", 100000000),
            ("₭50,000 Banknote", 50000000),
            ("₭20,000 Banknote", 20000000),
            ("₭10,000 Banknote", 10000000),
            ("₭5,000 Banknote", 5000000),
            ("₭2,000 Banknote", 2000000),
            ("₭1,000 Banknote", 1000000),
            ("₭500 Banknote", 500000),
            ("₭5,000 Coin", 5000000),
            ("₭1,000 Coin", 1000000),
            ("₭500 Coin", 500000),
            ("₭100 Coin", 100000),
            ("₭50 Coin", 50000),
        ],
    ),
    (
        "NGA",
        &[
            ("₦1000 Banknote", 1000000),
            ("₦500 Banknote", 500000),
            ("₦200 Banknote", 200000),
            ("₦100 Banknote", 100000),
            ("₦50 Banknote", 50000),
            ("₦20 Banknote", 20000),
            ("₦10 Banknote", 10000),
            ("₦5 Banknote", 5000),
            ("₦2 Coin", 2000),
            ("₦1 Coin", 1000),
            ("50 Kobo Coin", 500),
        ],
    ),
    (
        "KEN",
        &[
            ("KSh1000 Banknote", 1000000),
            ("KSh500 Banknote", 500000),
            ("KSh200 Banknote", 200000),
            ("KSh100 Banknote", 100000),
            ("KSh50 Banknote", 50000),
            ("KSh40 Coin", 40000),
            ("KSh20 Coin", 20000),
            ("KSh10 Coin", 10000),
            ("KSh5 Coin", 5000),
            ("KSh1 Coin", 1000),
            ("KES 50 Cents Coin", 500),
        ],
    ),
    (
        "GHA",
        &[
            ("₵200 Banknote", 200000),
            ("₵100 Banknote", 100000),
            ("₵50 Banknote", 50000),
            ("₵20 Banknote", 20000),
            ("₵10 Banknote", 10000),
            ("₵5 Banknote", 5000),
            ("₵2 Banknote", 2000),
            ("₵1 Banknote", 1000),
            ("₵2 Coin", 2000),
            ("₵1 Coin", 1000),
            ("50 Pesewas Coin", 500),
            ("20 Pesewas Coin", 200),
            ("10 Pesewas Coin", 100),
            ("5 Pesewas Coin", 50),
        ],
    ),
    (
        "MAR",
        &[
            ("د.م.200 Banknote", 200000),
            ("د.م.100 Banknote", 100000),
            ("د.م.50 Banknote", 50000),
            ("د.م.20 Banknote", 20000),
            ("د.م.10 Coin", 10000),
            ("د.م.5 Coin", 5000),
            ("د.م.2 Coin", 2000),
            ("د.م.1 Coin", 1000),
            ("50 Centimes Coin", 500),
            ("20 Centimes Coin", 200),
            ("10 Centimes Coin", 100),
        ],
    ),
    (
        "TUN",
        &[
            ("د.ت50 Banknote", 50000),
            ("د.ت30 Banknote", 30000),
            ("د.ت20 Banknote", 20000),
            ("د.ت10 Banknote", 10000),
            ("د.ت5 Banknote", 5000),
            ("د.ت5 Coin", 5000),
            ("د.ت2 Coin", 2000),
            ("د.ت1 Coin", 1000),
            ("500 Millimes Coin", 500),
            ("100 Millimes Coin", 100),
            ("50 Millimes Coin", 50),
        ],
    ),
    (
        "ETH",
        &[
            ("Bir200 Banknote", 200000),
            ("Bir100 Banknote", 100000),
            ("Bir50 Banknote", 50000),
            ("Bir10 Banknote", 10000),
            ("Bir5 Banknote", 5000),
            ("Bir1 Banknote", 1000),
            ("Bir1 Coin", 1000),
            ("50 Bir Santim Coin", 500),
            ("25 Bir Santim Coin", 250),
            ("10 Bir Santim Coin", 100),
            ("5 Bir Santim Coin", 50),
            ("1 Bir Santim Coin", 10),
        ],
    ),
    (
        "DZA",
        &[
            ("د.ج2000 Banknote", 2000000),
            ("د.ج1000 Banknote", 1000000),
            ("د.ج500 Banknote", 500000),
            ("د.ج200 Banknote", 200000),
            ("د.ج100 Banknote", 100000),
            ("د.ج200 Coin", 200000),
            ("د.ج100 Coin", 100000),
            ("د.ج50 Coin", 50000),
            ("د.ج20 Coin", 20000),
            ("د.ج10 Coin", 10000),
            ("د.ج5 Coin", 5000),
        ],
    ),
    (
        "UKR",
        &[
            ("₴1000 Banknote", 1000000),
            ("₴500 Banknote", 500000),
            ("₴200 Banknote", 200000),
            ("₴100 Banknote", 100000),
            ("₴50 Banknote", 50000),
            ("₴20 Banknote", 20000),
            ("₴10 Banknote", 10000),
            ("₴10 Coin", 10000),
            ("₴5 Coin", 5000),
            ("₴2 Coin", 2000),
            ("₴1 Coin", 1000),
            ("50 Kopiyok Coin", 500),
            ("25 Kopiyok Coin", 250),
            ("10 Kopiyok Coin", 100),
            ("5 Kopiyok Coin", 50),
            ("2 Kopiyky Coin", 20),
            ("1 Kopiyky Coin", 10),
        ],
    ),
    (
        "ROU",
        &[
            ("500 lei Banknote", 500000),
            ("200 lei Banknote", 200000),
            ("100 lei Banknote", 100000),
            ("50 lei Banknote", 50000),
            ("20 lei Banknote", 20000),
            ("10 lei Banknote", 10000),
            ("1 leu Coin", 1000),
            ("50 bani Coin", 500),
            ("10 bani Coin", 100),
            ("5 bani Coin", 50),
            ("1 ban Coin", 10),
        ],
    ),
    (
        "BGR",
        &[
            ("лв100 Banknote", 100000),
            ("лв50 Banknote", 50000),
            ("лв20 Banknote", 20000),
            ("лв10 Banknote", 10000),
            ("лв5 Banknote", 5000),
            ("лв2 Coin", 2000),
            ("лв1 Coin", 1000),
            ("50 стотинки Coin", 500),
            ("20 стотинки Coin", 200),
            ("10 стотинки Coin", 100),
            ("5 стотинки Coin", 50),
            ("2 стотинки Coin", 20),
            ("1 стотинка Coin", 10),
        ],
    ),
    (
        "SRB",
        &[
            ("дин5000 Banknote", 5000000),
            ("дин2000 Banknote", 2000000),
            ("дин1000 Banknote", 1000000),
            ("дин500 Banknote", 500000),
            ("дин200 Banknote", 200000),
            ("дин100 Banknote", 100000),
            ("дин50 Banknote", 50000),
            ("дин20 Banknote", 20000),
            ("дин10 Banknote", 10000),
            ("дин20 Coin", 20000),
            ("дин10 Coin", 10000),
            ("дин5 Coin", 5000),
            ("дин2 Coin", 2000),
            ("дин1 Coin", 1000),
        ],
    ),
    (
        "ISL",
        &[
            ("10,000 kr Banknote", 10000000),
            ("5,000 kr Banknote", 5000000),
            ("2,000 kr Banknote", 2000000),
            ("1,000 kr Banknote", 1000000),
            ("500 kr Banknote", 500000),
            ("100 kr Coin", 100000),
            ("50 kr Coin", 50000),
            ("10 kr Coin", 10000),
            ("5 kr Coin", 5000),
            ("1 kr Coin", 1000),
        ],
    ),
    (
        "BLR",
        &[
            ("Br500 Banknote", 500000),
            ("Br200 Banknote", 200000),
            ("Br100 Banknote", 100000),
            ("Br50 Banknote", 50000),
            ("Br20 Banknote", 20000),
            ("Br10 Banknote", 10000),
            ("Br5 Banknote", 5000),
            ("2 Br2 Coin", 2000),
            ("2 Br1 Coin", 1000),
            ("50 Br Kopecks Coin", 500),
            ("20 Br Kopecks Coin", 200),
            ("10 Br Kopecks Coin", 100),
            ("5 Br Kopecks Coin", 50),
            ("2 Br Kopecks Coin", 20),
            ("1 Br Kopeck Coin", 10),
        ],
    ),
    (
        "FJI",
        &[
            ("FJ$100 Banknote", 100000),
            ("FJ$50 Banknote", 50000),
            ("FJ$20 Banknote", 20000),
            ("FJ$10 Banknote", 10000),
            ("FJ$5 Banknote", 5000),
            ("FJ$2 Coin", 2000),
            ("FJ$1 Coin", 1000),
            ("FJD 50 Cents Coin", 500),
            ("FJD 20 Cents Coin", 200),
            ("FJD 10 Cents Coin", 100),
            ("FJD 5 Cents Coin", 50),
        ],
    ),
    (
        "PNG",
        &[
            ("K100 Banknote", 100000),
            ("K50 Banknote", 50000),
            ("K20 Banknote", 20000),
            ("K10 Banknote", 10000),
            ("K5 Banknote", 5000),
            ("K2 Banknote", 2000),
            ("K1 Coin", 1000),
            ("50 Toea Coin", 500),
            ("20 Toea Coin", 200),
            ("10 Toea Coin", 100),
            ("5 Toea Coin", 50),
        ],
    ),
    (
        "JAM",
        &[
            ("J$5000 Banknote", 5000000),
            ("J$1000 Banknote", 1000000),
            ("J$500 Banknote", 500000),
            ("J$100 Banknote", 100000),
            ("J$50 Banknote", 50000),
            ("J$20 Coin", 20000),
            ("J$10 Coin", 10000),
            ("J$5 Coin", 5000),
            ("J$1 Coin", 1000),
            ("JMD 50 Cents Coin", 500),
            ("JMD 25 Cents Coin", 250),
            ("JMD 10 Cents Coin", 100),
        ],
    ),
    (
        "CRI",
        &[
            ("₡20,000 Banknote", 20000000),
            ("₡10,000 Banknote", 10000000),
            ("₡5,000 Banknote", 5000000),
            ("₡2,000 Banknote", 2000000),
            ("₡1,000 Banknote", 1000000),
            ("₡500 Coin", 500000),
            ("₡100 Coin", 100000),
            ("₡50 Coin", 50000),
            ("₡25 Coin", 25000),
            ("₡10 Coin", 10000),
            ("₡5 Coin", 5000),
        ],
    ),
    (
        "GTM",
        &[
            ("Q200 Banknote", 200000),
            ("Q100 Banknote", 100000),
            ("Q50 Banknote", 50000),
            ("Q20 Banknote", 20000),
            ("Q10 Banknote", 10000),
            ("Q5 Banknote", 5000),
            ("Q1 Banknote", 1000),
            ("Q1 Coin", 1000),
            ("GTQ 50 Centavos Coin", 500),
            ("GTQ 25 Centavos Coin", 250),
            ("GTQ 10 Centavos Coin", 100),
            ("5 Centavos Coin", 50),
        ],
    ),
    (
        "KWT",
        &[
            ("د.ك 20 Banknote", 20000),
            ("د.ك 10 Banknote", 10000),
            ("د.ك 5 Banknote", 5000),
            ("د.ك 1 Banknote", 1000),
            ("د.ك 1/2 Banknote", 500),
            ("د.ك 1/4 Banknote", 250),
            ("KWD 100 Fils Coin", 100),
            ("KWD 50 Fils Coin", 50),
            ("KWD 20 Fils Coin", 20),
            ("KWD 10 Fils Coin", 10),
            ("KWD 5 Fils Coin", 5),
        ],
    ),
    (
        "QAT",
        &[
            ("ر.ق 500 Banknote", 500000),
            ("ر.ق 100 Banknote", 100000),
            ("ر.ق 50 Banknote", 50000),
            ("ر.ق 10 Banknote", 10000),
            ("ر.ق 5 Banknote", 5000),
            ("ر.ق 1 Banknote", 1000),
            ("50 Dirhams Coin", 500),
            ("25 Dirhams Coin", 250),
            ("10 Dirhams Coin", 100),
            ("5 Dirhams Coin", 50),
        ],
    ),
    (
        "OMN",
        &[
            ("ر.ع 50 Banknote", 50000),
            ("ر.ع 20 Banknote", 20000),
            ("ر.ع 10 Banknote", 10000),
            ("ر.ع 5 Banknote", 5000),
            ("ر.ع 1 Banknote", 1000),
            ("500 Baisa Coin", 500),
            ("100 Baisa Coin", 100),
            ("50 Baisa Coin", 50),
            ("25 Baisa Coin", 25),
            ("10 Baisa Coin", 10),
        ],
    ),
    (
        "BHR",
        &[
            ("ب.د 20 Banknote", 20000),
            ("ب.د 10 Banknote", 10000),
            ("ب.د 5 Banknote", 5000),
            ("ب.د 1 Banknote", 1000),
            ("ب.د 1/2 Banknote", 500),
            ("BHD 100 Fils Coin", 100),
            ("BHD 50 Fils Coin", 50),
            ("BHD 25 Fils Coin", 25),
            ("BHD 10 Fils Coin", 10),
            ("BHD 5 Fils Coin", 5),
        ],
    ),
    (
        "JOR",
        &[
            ("د.ا 50 Banknote", 50000),
            ("د.ا 20 Banknote", 20000),
            ("د.ا 10 Banknote", 10000),
            ("د.ا 5 Banknote", 5000),
            ("د.ا 1 Banknote", 1000),
            ("د.ا 1/2 Coin", 500),
            ("د.ا 1/4 Coin", 250),
            ("JOD 100 Fils Coin", 100),
            ("JOD 50 Fils Coin", 50),
            ("JOD 25 Fils Coin", 25),
            ("JOD 10 Fils Coin", 10),
        ],
    ),
    (
        "KAZ",
        &[
            ("₸20,000 Banknote", 20000000),
            ("₸10,000 Banknote", 10000000),
            ("₸5,000 Banknote", 5000000),
            ("₸2,000 Banknote", 2000000),
            ("₸1,000 Banknote", 1000000),
            ("₸500 Banknote", 500000),
            ("₸200 Banknote", 200000),
            ("₸200 Coin", 200000),
            ("₸100 Coin", 100000),
            ("₸50 Coin", 50000),
            ("₸20 Coin", 20000),
            ("₸10 Coin", 10000),
            ("₸5 Coin", 5000),
            ("₸2 Coin", 2000),
            ("₸1 Coin", 1000),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(denominations_for("phl").is_some());
        assert!(denominations_for("XXX").is_none());
    }

    #[test]
    fn test_peso_denominations() {
        let table = denominations_for("PHL").unwrap();
        assert_eq!(table[0], ("₱ 1000 Bill", 1000000));
        assert_eq!(denomination_value(table[0].1), dec!(1000.00));
        assert!(table.iter().any(|(_, v)| denomination_value(*v) == dec!(0.25)));
    }

    #[test]
    fn test_every_table_is_positive_and_non_empty() {
        for (code, table) in DENOMINATIONS {
            assert!(!table.is_empty(), "{}", code);
            assert!(table.iter().all(|(_, v)| *v > 0), "{}", code);
        }
    }

    #[test]
    fn test_fils_denominations_keep_thousandths() {
        let table = denominations_for("KWT").unwrap();
        assert!(table.iter().any(|(_, v)| denomination_value(*v) == dec!(0.005)));
    }

    #[test]
    fn test_cfa_francs_resolve_by_currency_code() {
        assert!(denominations_for("").is_none());
        assert!(denominations_for_currency("", "XOF").is_some());
        assert!(denominations_for_currency("", "XAF").is_some());
        assert_eq!(
            denominations_for_currency("PHL", "PHP"),
            denominations_for("PHL")
        );
    }

    #[test]
    fn test_every_table_has_a_currency() {
        for (code, _) in DENOMINATIONS {
            assert!(
                crate::seed::currency::CURRENCIES
                    .iter()
                    .any(|c| c.iso_3166_alpha3 == *code || c.currency_code == *code),
                "{}",
                code
            );
        }
    }

    #[test]
    fn test_every_seeded_currency_has_denominations() {
        for currency in crate::seed::currency::CURRENCIES {
            // Special drawing rights have no physical cash
            if currency.currency_code == "XDR" {
                continue;
            }
            assert!(
                denominations_for_currency(currency.iso_3166_alpha3, currency.currency_code)
                    .is_some(),
                "{}",
                currency.currency_code
            );
        }
    }
}
