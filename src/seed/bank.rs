//! Bank reference data

pub type BankSeed = (&'static str, &'static str);

/// Banks and wallets seeded into every branch
pub static GLOBAL_BANKS: &[BankSeed] = &[
    ("HSBC", "One of the world’s largest multinational banks, serving customers globally with retail, commercial, and investment banking."),
    ("Citibank", "A major global bank headquartered in the United States, known for strong international consumer and corporate banking services."),
    ("JPMorgan Chase", "The largest bank in the United States offering worldwide financial services including investment, retail, and commercial banking."),
    ("Bank of America", "A leading US-based multinational bank providing global banking, investing, and financial risk management services."),
    ("Wells Fargo", "A major American financial services company offering banking, investment, and mortgage products with international reach."),
    ("Standard Chartered", "A British multinational bank operating across Asia, Africa, Europe, and the Middle East with strong global trade presence."),
    ("Barclays", "A British universal bank with global operations including retail, corporate, and investment banking."),
    ("Deutsche Bank", "Germany’s largest bank providing global investment banking, corporate solutions, and financial services."),
    ("BNP Paribas", "A major French international banking group offering retail and corporate financial services worldwide."),
    ("UBS", "A Swiss multinational investment bank known globally for wealth management and financial advisory."),
    ("Credit Suisse", "A Swiss global bank recognized for investment banking, wealth management, and finance services."),
    ("Santander", "A Spanish multinational bank offering retail and commercial banking services across Europe and the Americas."),
    ("ING", "A Dutch multinational banking group focused on retail, direct banking, and international financial services."),
    ("Scotiabank", "A Canadian global bank with strong international banking operations across Latin America and other regions."),
    ("Royal Bank of Canada (RBC)", "Canada’s largest bank, offering extensive global banking, wealth management, and investment services."),
    ("Credit Agricole", "A leading French international banking group specializing in retail and corporate banking."),
    ("Mizuho Bank", "A major Japanese multinational bank providing global corporate and investment banking services."),
    ("MUFG Bank", "Japan’s largest bank with a strong international footprint in corporate and retail banking."),
    ("Sumitomo Mitsui Banking Corporation (SMBC)", "A top Japanese global financial institution offering corporate and investment banking worldwide."),
    ("Revolut", "A global financial super-app offering international banking, money transfers, cards, and digital finance services."),
    ("Wise", "A global fintech company specializing in low-cost international money transfers and digital accounts."),
    ("PayPal", "A widely used global online payment platform offering digital wallets and financial services."),
    ("N26", "A fully digital European bank providing international mobile banking services."),
    ("Monzo", "A UK-based digital bank known for seamless international banking through mobile-first features."),
    ("Google Pay", "A widely used digital wallet and online payment system available globally for online and in-store purchases."),
    ("Apple Pay", "A secure mobile payment and digital wallet service allowing payments via Apple devices worldwide."),
    ("Samsung Pay", "A global mobile payment platform allowing contactless payments and online transactions via Samsung devices."),
    ("PayU", "A global fintech company offering online payment solutions and e-wallet services in multiple countries."),
    ("Stripe", "A leading online payment processing platform supporting global e-commerce, subscriptions, and financial services."),
    ("Alipay", "China’s largest mobile and online payment platform widely used internationally for cross-border payments."),
    ("WeChat Pay", "A Chinese mobile payment and digital wallet service integrated into the WeChat app for global transactions."),
    ("Venmo", "A US-based mobile payment service allowing peer-to-peer transfers and online payments."),
    ("Cash App", "A US-based mobile wallet enabling peer-to-peer money transfers, Bitcoin transactions, and investing."),
];

/// Additional banks keyed by the ISO 3166 alpha-3 code of the branch currency.
/// Currencies without an alpha-3 code (the CFA francs, SDR) are keyed by
/// currency code.
pub static COUNTRY_BANKS: &[(&str, &[BankSeed])] = &[
    (
        "USA",
        &[
            ("Chase Bank", "One of the largest US banks offering retail, commercial, and investment banking services."),
            ("Bank of America", "A leading national bank providing consumer, business, and private banking services."),
            ("Wells Fargo", "A major US bank offering nationwide banking, loans, and financial services."),
            ("CitiBank", "A global US bank with strong international and domestic banking operations."),
            ("U.S. Bank", "A large national bank offering a full range of financial services."),
            ("PNC Bank", "A major US bank offering retail and corporate banking, widely used across the East Coast."),
            ("Capital One", "A popular US bank known for credit cards, auto loans, and online banking."),
            ("Truist Bank", "A major regional bank formed from BB&T and SunTrust, offering full financial services."),
            ("Bank of New York Mellon", "A global investments and asset management company."),
            ("Goldman Sachs", "A top US investment bank offering financial advisory and asset management services."),
            ("Morgan Stanley", "A leading global investment bank based in the United States."),
            ("Fifth Third Bank", "A well-known regional bank serving the Midwest and Southeast US."),
            ("KeyBank", "A regional bank offering personal and business banking across multiple US states."),
            ("Regions Bank", "A Southeastern regional bank providing retail and corporate banking services."),
            ("Huntington Bank", "A Midwest regional bank known for consumer and small business banking services."),
            ("TD Bank USA", "The US arm of TD Bank Group, offering retail banking across the East Coast."),
            ("Navy Federal Credit Union", "The largest credit union in the US serving military members and families."),
            ("Alliant Credit Union", "A large US digital credit union offering nationwide banking services."),
            ("Pentagon Federal Credit Union (PenFed)", "A major US credit union providing a variety of financial services."),
            ("Ally Bank", "A popular online-only bank in the US offering savings, checking, and loans."),
            ("Discover Bank", "An online bank known for its credit cards and high-yield deposit accounts."),
            ("Axos Bank", "A digital bank providing online checking, savings, and loan services."),
            ("Chime", "A leading US neobank offering fee-free digital banking through a mobile app."),
            ("Varo Bank", "A fully digital US bank with no-fee checking and savings accounts."),
            ("SoFi Bank", "A digital bank offering loans, investing, and mobile banking services."),
            ("Current", "A mobile-first US banking platform offering instant notifications and budgeting tools."),
            ("Green Dot Bank", "A branchless US bank providing prepaid cards and online financial services."),
        ],
    ),
    (
        "EUR",
        &[
            ("Deutsche Bank", "Germany’s largest bank with global investment and corporate banking operations."),
            ("Commerzbank", "A major German bank offering retail, corporate, and international banking services."),
            ("BNP Paribas", "A major French banking group providing global financial and retail banking services."),
            ("Crédit Agricole", "A leading French retail and commercial bank with strong EU presence."),
            ("Société Générale", "A major French bank offering corporate, investment, and retail banking."),
            ("ING Group", "A Dutch multinational bank offering retail and direct banking services across Europe."),
            ("UniCredit", "A leading Italian banking group with operations across Europe."),
            ("Santander", "A Spanish multinational bank providing retail and commercial banking across Europe."),
            ("ABN AMRO", "A Dutch bank known for retail, commercial, and international banking."),
            ("Revolut", "A global financial super app offering international banking and card services."),
            ("N26", "A German mobile-only bank offering modern digital banking services in the EU."),
            ("Bunq", "A Dutch fully digital bank providing innovative mobile banking services across Europe."),
        ],
    ),
    (
        "JPN",
        &[
            ("MUFG Bank", "Japan’s largest bank offering global corporate, retail, and investment banking."),
            ("Mizuho Bank", "A leading Japanese bank providing financial services across Asia and worldwide."),
            ("SMBC (Sumitomo Mitsui Banking Corporation)", "A top Japanese bank known for corporate and investment banking."),
            ("Japan Post Bank", "One of Japan’s largest retail banks with nationwide branches."),
            ("Resona Bank", "A major regional banking group in Japan offering retail financial services."),
            ("Shinsei Bank", "A Japanese commercial bank providing retail and institutional financial services."),
            ("Sony Bank", "A Japanese online bank offering digital savings, loans, and FX services."),
            ("Rakuten Bank", "Japan’s largest online bank offering digital accounts and payment services."),
        ],
    ),
    (
        "GBR",
        &[
            ("HSBC UK", "One of the largest UK banks offering full retail and corporate banking services."),
            ("Barclays", "A major British multinational bank with strong retail and investment banking."),
            ("Lloyds Bank", "A leading UK retail and commercial bank with nationwide presence."),
            ("NatWest", "A major retail and commercial bank serving individuals and businesses across the UK."),
            ("Standard Chartered", "A British multinational bank with strong global operations."),
            ("Royal Bank of Scotland (RBS)", "A well-known UK bank offering retail and commercial banking."),
            ("TSB Bank", "A popular UK retail bank with community-focused banking services."),
            ("Halifax", "A major UK retail bank specializing in mortgages and savings."),
            ("Revolut", "A global fintech bank offering multi-currency accounts and digital banking."),
            ("Monzo", "A popular UK mobile-only bank offering modern digital financial services."),
            ("Starling Bank", "A fully digital UK bank offering personal, business, and joint accounts."),
            ("Atom Bank", "A UK-based online bank specializing in savings and mortgage products."),
        ],
    ),
    (
        "AUS",
        &[
            ("Commonwealth Bank", "Australia’s largest bank offering retail, business, and institutional banking."),
            ("Westpac", "A major Australian bank providing nationwide and international financial services."),
            ("ANZ (Australia and New Zealand Banking Group)", "A leading bank serving Australia, NZ, and the Asia-Pacific region."),
            ("NAB (National Australia Bank)", "One of Australia's largest banks offering comprehensive financial services."),
            ("Bank of Queensland", "A retail bank operating across Queensland and other states."),
            ("Bendigo Bank", "A community-focused Australian bank providing retail financial services."),
            ("Macquarie Bank", "A global Australian financial services group specializing in investment banking."),
            ("UP Bank", "A digital Australian neobank offering mobile-first banking."),
            ("86 400", "A digital neobank in Australia offering smart mobile banking solutions."),
        ],
    ),
    (
        "CAN",
        &[
            ("Royal Bank of Canada (RBC)", "Canada’s largest bank offering comprehensive financial services worldwide."),
            ("TD Canada Trust", "A major Canadian bank providing retail and commercial banking across Canada and the US."),
            ("Scotiabank", "A global Canadian bank with strong operations in the Americas."),
            ("Bank of Montreal (BMO)", "One of Canada’s oldest banks providing retail and commercial banking."),
            ("CIBC (Canadian Imperial Bank of Commerce)", "A major Canadian financial institution offering retail and corporate banking."),
            ("National Bank of Canada", "A leading bank in Quebec offering nationwide financial services."),
            ("HSBC Canada", "The Canadian branch of HSBC offering international banking services."),
            ("Tangerine Bank", "A Canadian online bank offering no-fee digital banking services."),
            ("Simplii Financial", "A fully digital bank operated by CIBC offering no-fee banking."),
            ("EQ Bank", "A Canadian online bank providing high-interest savings and digital banking."),
        ],
    ),
    (
        "CHE",
        &[
            ("UBS", "Switzerland’s largest bank offering global wealth, retail, and investment banking services."),
            ("Credit Suisse", "A major Swiss bank known for wealth management and global investment banking."),
            ("Julius Baer", "A leading Swiss private bank focused on wealth and asset management."),
            ("Raiffeisen Switzerland", "A large cooperative bank group offering retail banking services."),
            ("Zurich Cantonal Bank (ZKB)", "A major Swiss cantonal bank offering retail and corporate banking."),
            ("Neon Bank", "A Swiss digital bank offering mobile-first personal banking."),
            ("Yapeal", "A digital banking platform in Switzerland providing modern mobile banking services."),
        ],
    ),
    (
        "CHN",
        &[
            ("Industrial and Commercial Bank of China (ICBC)", "The largest bank in China and one of the biggest globally, offering retail and corporate banking."),
            ("China Construction Bank (CCB)", "A major state-owned bank specializing in infrastructure and housing finance."),
            ("Agricultural Bank of China (ABC)", "One of China’s biggest banks, serving rural and urban banking needs."),
            ("Bank of China (BOC)", "A leading Chinese bank with a strong global presence and international banking services."),
            ("Bank of Communications", "One of China’s oldest banks, offering commercial and retail banking services."),
            ("China Merchants Bank (CMB)", "A major commercial bank known for innovative retail and corporate banking."),
            ("Shanghai Pudong Development Bank (SPDB)", "A large commercial bank providing corporate finance and digital banking."),
            ("China CITIC Bank", "A mid-tier Chinese bank offering retail and corporate financial services."),
            ("Alipay", "China’s largest digital wallet and payment platform operated by Ant Group."),
            ("WeChat Pay", "A dominant mobile payment service integrated with the WeChat ecosystem."),
            ("JD Finance", "A fintech platform offering digital payments and consumer finance services."),
            ("MyBank", "An online-only bank backed by Ant Group offering digital financial services."),
            ("WeBank", "China’s first fully digital bank, owned by Tencent, offering mobile-first banking."),
        ],
    ),
    (
        "SWE",
        &[
            ("Swedbank", "One of Sweden’s largest banks offering retail, private, and corporate banking."),
            ("SEB (Skandinaviska Enskilda Banken)", "A major Nordic financial group providing business and private banking."),
            ("Handelsbanken", "A well-known Swedish bank offering retail and corporate banking across Europe."),
            ("Nordea", "The largest Nordic bank offering financial services across Sweden and Europe."),
            ("Länsförsäkringar Bank", "A Swedish retail bank offering consumer loans and savings."),
            ("Ikano Bank", "A consumer finance bank originally founded by the IKEA family."),
            ("Klarna", "A Swedish fintech giant known for buy-now-pay-later, digital payments, and e-wallet services."),
            ("Revolut", "A popular EU digital banking platform used widely in Sweden."),
            ("P.F.C. (Personal Finance Co.)", "A Swedish neobank offering mobile-first banking and budgeting tools."),
            ("Rocker", "A Swedish fintech offering digital financial services and payments."),
            ("Swish", "Sweden’s widely used mobile payment system linked to Swedish banks."),
        ],
    ),
    (
        "NZL",
        &[
            ("ANZ New Zealand", "New Zealand’s largest bank providing retail, business, and wealth banking."),
            ("ASB Bank", "A major NZ bank offering consumer, business, and rural banking services."),
            ("BNZ (Bank of New Zealand)", "One of the oldest NZ banks offering full retail and commercial banking."),
            ("Westpac New Zealand", "A leading bank offering retail, business, and community banking services."),
            ("Kiwibank", "A New Zealand state-owned bank offering competitive retail banking services."),
            ("TSB Bank", "A New Zealand-owned bank providing personal and business banking."),
            ("Heartland Bank", "A New Zealand bank known for mortgages, small business lending, and digital services."),
            ("Wise", "A global digital bank widely used in New Zealand for international transfers."),
            ("Revolut", "A digital financial super-app offering multi-currency accounts and payments in NZ."),
            ("Jersey", "An upcoming NZ-based digital wallet and financial services provider."),
            ("Apple Pay", "A widely used mobile wallet supporting NZ contactless payments."),
            ("Google Pay", "A digital wallet for online and contactless payments in New Zealand."),
        ],
    ),
    (
        "PHL",
        &[
            ("BDO Unibank", "The largest bank in the Philippines offering retail, corporate, and international banking services."),
            ("BPI (Bank of the Philippine Islands)", "One of the oldest and largest universal banks in the Philippines."),
            ("Metrobank", "A major Philippine bank offering corporate and consumer financial services."),
            ("Landbank of the Philippines", "A government-owned bank focused on agriculture and public-sector banking."),
            ("PNB (Philippine National Bank)", "A leading universal bank with wide domestic and international operations."),
            ("Security Bank", "A top Philippine bank offering retail and business banking solutions."),
            ("Chinabank", "A Philippine bank known for SME banking and commercial services."),
            ("RCBC (Rizal Commercial Banking Corporation)", "A major commercial bank offering personal and corporate financial services."),
            ("UnionBank of the Philippines", "A leading digital bank in the Philippines offering innovative online banking."),
            ("EastWest Bank", "A universal bank offering consumer loans, credit cards, and retail banking."),
            ("Asia United Bank (AUB)", "A Philippine commercial bank known for strong business banking services."),
            ("UCPB (United Coconut Planters Bank)", "A commercial bank merged with Landbank providing retail and corporate banking."),
            ("Sterling Bank of Asia", "A thrift bank offering consumer and SME banking."),
            ("Philtrust Bank", "One of the oldest banks specializing in trust and retail banking."),
            ("Robinsons Bank", "A commercial bank serving retail and SME sectors."),
            ("HSBC Philippines", "The Philippine branch of HSBC offering retail and global banking services."),
            ("Citibank Philippines", "Offers credit cards and wealth banking; retail portfolio now merged with UnionBank."),
            ("Standard Chartered Philippines", "A multinational bank offering corporate and institutional banking."),
            ("Maybank Philippines", "A Malaysian bank providing retail and commercial banking in the Philippines."),
            ("Bank of Tokyo-Mitsubishi UFJ Manila", "A major Japanese bank offering corporate financing services."),
            ("Maya Bank", "A fully digital bank offering high-yield savings, wallets, and virtual cards."),
            ("SeaBank", "A digital bank under Shopee focusing on high-interest savings and digital services."),
            ("Tonik Bank", "The first neobank in the Philippines offering full digital banking."),
            ("GoTyme Bank", "A digital bank offering kiosks, debit cards, and mobile-first banking."),
            ("UNObank", "A digital bank providing fully online savings, loans, and financial services."),
            ("Overseas Filipino Bank (OFBank)", "The first government-owned digital bank focused on OFWs."),
            ("GCash", "The largest e-wallet in the Philippines offering payments, savings, and QR transactions."),
            ("Maya", "A widely used wallet and digital bank offering bills payment and remittances."),
            ("ShopeePay", "A popular wallet for online payments, transfers, and bills in Shopee ecosystem."),
            ("Lazada Wallet", "An e-wallet for online purchases and refunds on Lazada."),
            ("GrabPay", "A mobile wallet for Grab services, payments, and online shopping."),
            ("Coins.ph", "A digital wallet offering crypto, remittances, and bill payments."),
            ("StarPay", "A government-accredited e-wallet used for social aid distribution."),
            ("Bayad Wallet", "A digital wallet for bills payment and government services."),
            ("Komo by EastWest", "A digital-only banking service offering online savings with high interest."),
            ("Card Bank", "A microfinance-oriented rural bank serving low-income communities."),
            ("BDO Network Bank", "BDO’s rural bank focused on micro and small loans."),
            ("One Network Bank", "A rural bank (merged with BDO Network Bank) providing financial services in Mindanao."),
            ("Cantilan Bank", "A rural bank known for technological innovation and digital finance."),
            ("Producers Bank", "A growing rural bank offering retail loans and microfinance."),
            ("Rizal Rural Bank", "A rural bank offering traditional deposit and loan services."),
        ],
    ),
    (
        "IND",
        &[
            ("State Bank of India (SBI)", "India’s largest public sector bank offering extensive nationwide and international banking services."),
            ("HDFC Bank", "A top private bank in India known for retail banking, loans, and digital banking services."),
            ("ICICI Bank", "A major private sector bank offering a wide range of banking and financial services across India."),
            ("Punjab National Bank (PNB)", "One of India's largest public sector banks with a strong branch network nationwide."),
            ("Axis Bank", "A well-known private bank offering retail, corporate, and digital banking services."),
            ("Kotak Mahindra Bank", "A private bank in India known for innovative banking and wealth management services."),
            ("Paytm", "India’s leading digital wallet and payments platform offering e-money and banking services."),
            ("PhonePe", "A widely used UPI-based mobile wallet for digital payments across India."),
            ("Google Pay India", "UPI-based digital payment service widely used for instant transfers and payments."),
        ],
    ),
    (
        "KOR",
        &[
            ("KB Kookmin Bank", "South Korea’s largest bank, offering retail, corporate, and global banking services."),
            ("Shinhan Bank", "A major bank in Korea providing comprehensive financial and global banking services."),
            ("Woori Bank", "One of South Korea’s oldest banks offering extensive domestic and international services."),
            ("Hana Bank", "A leading Korean bank known for corporate, retail, and global finance solutions."),
            ("Industrial Bank of Korea (IBK)", "A government-owned bank serving small and medium enterprises in Korea."),
            ("KakaoPay", "South Korea’s leading mobile wallet integrated with Kakao ecosystem for payments and transfers."),
            ("Naver Pay", "A major e-wallet linked to the Naver platform for e-commerce and digital payments."),
            ("Samsung Pay", "A mobile payment system widely used in Korea for contactless and online payments."),
        ],
    ),
    (
        "THA",
        &[
            ("Bangkok Bank", "Thailand’s largest bank offering retail, commercial, and international banking."),
            ("Kasikornbank (KBank)", "A major Thai bank known for digital banking and SME support."),
            ("Siam Commercial Bank (SCB)", "One of the oldest and largest Thai banks offering full financial services."),
            ("Krungthai Bank (KTB)", "A state-owned commercial bank serving nationwide financial needs."),
            ("TMBThanachart Bank (TTB)", "A leading bank formed from the TMB and Thanachart merger offering retail banking services."),
            ("TrueMoney Wallet", "Thailand’s most popular e-wallet offering payments, transfers, and mobile banking features."),
            ("PromptPay", "A government-backed digital payment system widely used for QR and mobile transfers."),
            ("AirPay / ShopeePay", "A widely used digital wallet integrated with Shopee for payments and promotions."),
        ],
    ),
    (
        "SGP",
        &[
            ("DBS Bank", "Singapore’s largest bank known for strong digital banking and global financial operations."),
            ("OCBC Bank", "A major Singaporean multinational bank offering corporate, retail, and investment services."),
            ("United Overseas Bank (UOB)", "A leading bank in Southeast Asia offering full financial solutions."),
            ("Standard Chartered Singapore", "A global bank with strong presence in Singapore for personal and business banking."),
            ("HSBC Singapore", "A multinational bank offering extensive corporate and wealth management services in Singapore."),
            ("GrabPay", "A widely adopted digital wallet in Singapore used for payments, transfers, and ride-hailing services."),
            ("PayNow", "Singapore’s national QR and mobile transfer system supported by major banks."),
            ("NETS", "Singapore’s popular electronic payment system used nationwide."),
        ],
    ),
    (
        "HKG",
        &[
            ("HSBC Hong Kong", "One of Hong Kong’s most dominant banks offering personal and commercial banking services."),
            ("Bank of China (Hong Kong)", "A major state-backed bank offering corporate, personal, and cross-border banking services."),
            ("Standard Chartered Hong Kong", "A major multinational bank with strong presence in Hong Kong’s financial sector."),
            ("Hang Seng Bank", "A leading local bank known for retail, commercial, and wealth management services."),
            ("Citibank Hong Kong", "A major international bank offering global banking and wealth services in Hong Kong."),
            ("AlipayHK", "A popular Hong Kong e-wallet for QR payments and transfers."),
            ("WeChat Pay HK", "A major digital wallet supporting QR payments, transfers, and cross-border transactions."),
            ("Octopus Wallet", "Hong Kong’s iconic stored-value e-payment card and digital wallet used in transport and retail."),
        ],
    ),
    (
        "MYS",
        &[
            ("Maybank", "Malaysia’s largest bank offering retail, corporate, and international banking services."),
            ("CIMB Bank", "A major Malaysian universal bank with extensive operations in ASEAN."),
            ("Public Bank Berhad", "One of Malaysia’s most stable banks known for customer-focused retail banking."),
            ("RHB Bank", "A leading Malaysian bank providing retail, commercial, and investment services."),
            ("Hong Leong Bank", "A major financial institution offering digital and traditional banking services across Malaysia."),
            ("Touch 'n Go eWallet", "Malaysia’s most popular e-wallet used for transport, retail, and online transactions."),
            ("Boost", "A leading Malaysian e-wallet used for QR payments, bills, and mobile reloads."),
            ("GrabPay Malaysia", "A widely adopted mobile wallet integrated with Grab's ecosystem."),
        ],
    ),
    (
        "IDN",
        &[
            ("Bank Rakyat Indonesia (BRI)", "Indonesia’s largest bank serving retail, microfinance, and corporate sectors."),
            ("Bank Mandiri", "A major Indonesian bank offering comprehensive banking and financial services."),
            ("Bank Central Asia (BCA)", "Indonesia’s leading private bank known for strong digital banking services."),
            ("Bank Negara Indonesia (BNI)", "A state-owned bank offering retail, business, and global banking services."),
            ("Permata Bank", "A fast-growing private bank providing modern digital and retail banking services."),
            ("GoPay", "Indonesia’s most popular e-wallet used in Gojek and general QR payments."),
            ("OVO", "A major digital wallet used for shopping, bills, and rewards."),
            ("DANA", "A widely used e-wallet offering QRIS payments, transfers, and online transactions."),
            ("ShopeePay Indonesia", "An e-wallet integrated with Shopee and used widely for QRIS payments."),
        ],
    ),
    (
        "VNM",
        &[
            ("Vietcombank", "Vietnam’s largest commercial bank offering a wide range of retail and corporate services."),
            ("VietinBank", "A major state-owned bank providing financial services nationwide."),
            ("BIDV", "One of the biggest Vietnamese banks offering personal and business banking."),
            ("Techcombank", "A fast-growing private bank known for strong digital banking services."),
            ("MB Bank", "A major Vietnamese bank offering modern digital and military-associated financial services."),
            ("MoMo", "Vietnam’s leading e-wallet offering payments, transfers, and mobile financial services."),
            ("ZaloPay", "A popular mobile wallet integrated with Zalo, Vietnam’s biggest messaging app."),
            ("ShopeePay Vietnam", "A digital wallet used for shopping and QR payments through Shopee."),
            ("VNPay", "A major Vietnamese QR payment platform used across shops nationwide."),
        ],
    ),
    (
        "TWN",
        &[
            ("Bank of Taiwan", "Taiwan’s largest state-owned bank offering comprehensive financial services."),
            ("CTBC Bank", "A major Taiwanese bank known for digital innovations and overseas presence."),
            ("Taipei Fubon Bank", "A leading financial institution offering retail and corporate banking solutions."),
            ("E.SUN Bank", "A well-known Taiwanese bank focused on customer service and digital banking."),
            ("Mega International Commercial Bank", "A major bank offering global finance and corporate services."),
            ("JKoPay", "Taiwan’s most popular e-wallet for QR payments and online transactions."),
            ("Line Pay Taiwan", "A widely used mobile wallet integrated with LINE messaging."),
            ("Apple Pay Taiwan", "A major contactless payment service used across retail outlets."),
            ("Taiwan Pay", "A government-backed QR and mobile payment solution."),
        ],
    ),
    (
        "BRN",
        &[
            ("Bank Islam Brunei Darussalam (BIBD)", "Brunei’s largest bank offering Sharia-compliant retail and corporate banking."),
            ("Baidhuri Bank", "A major bank in Brunei offering personal, corporate, and digital banking services."),
            ("Standard Chartered Brunei", "An international bank with significant operations in Brunei."),
            ("BIBD NEXGEN Wallet", "A mobile wallet by BIBD supporting online payments and transfers."),
            ("Progresif Pay", "A Brunei digital wallet used for payments, mobile top-ups, and remittances."),
            ("Beep Digital Wallet", "A local e-wallet used for QR payments and small retail transactions."),
        ],
    ),
    (
        "SAU",
        &[
            ("National Commercial Bank (NCB)", "Saudi Arabia’s largest bank, also known as AlAhli Bank, offering retail and corporate banking."),
            ("Al Rajhi Bank", "One of the world’s largest Islamic banks offering personal, business, and digital banking services."),
            ("Saudi British Bank (SABB)", "A major Saudi bank partnered with HSBC offering international financial services."),
            ("Riyad Bank", "A leading bank in Saudi Arabia providing retail and corporate financial services."),
            ("Arab National Bank (ANB)", "A large Saudi bank offering extensive commercial and personal banking."),
            ("Bank AlJazira", "An Islamic bank offering Sharia-compliant financial products."),
            ("STC Pay", "Saudi Arabia’s largest digital wallet for QR payments, transfers, and international remittances."),
            ("Mada Pay", "A national payment system supporting mobile and contactless transactions."),
            ("UrPay", "A rising Saudi digital wallet for payments and bill transactions."),
        ],
    ),
    (
        "ARE",
        &[
            ("Emirates NBD", "Dubai’s largest banking group offering retail, corporate, and international banking."),
            ("First Abu Dhabi Bank (FAB)", "The UAE’s biggest bank offering personal, business, and investment services."),
            ("Dubai Islamic Bank (DIB)", "The world’s first Islamic bank offering Sharia-compliant solutions."),
            ("Abu Dhabi Commercial Bank (ADCB)", "A major UAE bank offering retail, commercial, and digital banking."),
            ("Mashreq Bank", "One of the oldest private banks in the UAE with strong digital banking."),
            ("eWallet UAE", "A popular UAE digital wallet used for payments and transfers."),
            ("Apple Pay UAE", "A widely used mobile wallet for contactless payments."),
            ("Google Pay UAE", "A mobile payment system used across UAE retailers and services."),
            ("Careem Pay", "A growing wallet integrated with Careem services and ride-hailing."),
        ],
    ),
    (
        "ISR",
        &[
            ("Bank Hapoalim", "Israel’s largest bank offering comprehensive retail and corporate banking."),
            ("Bank Leumi", "One of Israel’s oldest and largest banks with strong digital banking services."),
            ("Israel Discount Bank", "A major bank providing personal, corporate, and investment banking."),
            ("Mizrahi-Tefahot Bank", "Israel’s third-largest bank known for mortgage lending."),
            ("First International Bank of Israel (FIBI)", "A large Israeli bank offering retail and commercial services."),
            ("Bit", "Israel’s most popular digital wallet allowing fast person-to-person and merchant payments."),
            ("Pepper Pay", "A digital banking app from Bank Leumi offering modern payment services."),
            ("PayBox", "A widely used mobile wallet for group payments and transfers."),
        ],
    ),
    (
        "ZAF",
        &[
            ("Standard Bank", "Africa’s largest bank offering retail, corporate, and investment banking services."),
            ("First National Bank (FNB)", "A major South African bank known for digital innovation and mobile banking."),
            ("ABSA Bank", "A leading financial services provider operating across Africa."),
            ("Nedbank", "A top-tier bank offering personal, business, and investment banking."),
            ("Capitec Bank", "One of South Africa’s biggest retail banks known for affordable digital banking."),
            ("SnapScan", "A popular South African QR payment app for fast retail transactions."),
            ("Zapper", "A widely used digital wallet using QR payments across shops and restaurants."),
            ("Vodapay", "A mobile wallet by Vodacom for online and in-store payments."),
        ],
    ),
    (
        "EGY",
        &[
            ("National Bank of Egypt (NBE)", "Egypt’s oldest and largest bank offering comprehensive financial services."),
            ("Banque Misr", "A major Egyptian state-owned bank providing retail and business banking."),
            ("Commercial International Bank (CIB)", "Egypt’s largest private bank known for digital banking."),
            ("Banque du Caire", "One of Egypt’s top banks offering nationwide retail and commercial services."),
            ("QNB Alahli", "A subsidiary of Qatar National Bank offering corporate and personal banking."),
            ("Vodafone Cash", "Egypt’s largest mobile wallet used for payments, transfers, and bill payments."),
            ("Etisalat Cash", "A popular e-wallet service in Egypt for transfers and PMT services."),
            ("Orange Money Egypt", "A mobile wallet offering payments and remittance services."),
            ("Meeza Digital Wallet", "Egypt’s national payment wallet supporting QR and online payments."),
        ],
    ),
    (
        "TUR",
        &[
            ("Ziraat Bankası", "Turkey’s largest state-owned bank offering comprehensive financial services nationwide."),
            ("Türkiye İş Bankası", "Turkey’s oldest and largest private bank known for retail and corporate banking."),
            ("Garanti BBVA", "A major Turkish bank known for digital banking and corporate services."),
            ("Akbank", "One of Turkey’s leading banks offering modern digital and financial services."),
            ("Halkbank", "A state-owned bank focused on SMEs and retail banking."),
            ("Papara", "Turkey’s most popular digital wallet offering payments, cards, and money transfers."),
            ("FastPay", "A digital wallet by DenizBank allowing free money transfers and bill payments."),
            ("Paycell", "A mobile wallet by Turkcell allowing payments, bills, and QR transactions."),
            ("Tosla", "A modern e-wallet by Akbank for online payments and transfers."),
        ],
    ),
    (
        "XOF",
        &[
            ("Ecobank", "A major pan-African bank with strong presence in West Africa offering retail and corporate banking."),
            ("Bank of Africa (BOA)", "A leading banking group operating across many West African countries."),
            ("Société Générale de Banques", "A regional arm of Société Générale offering banking in multiple West African states."),
            ("Coris Bank International", "A growing West African bank offering personal and business banking."),
            ("UBA (United Bank for Africa)", "A pan-African bank offering retail banking, business banking, and digital services."),
            ("Orange Money", "One of the most widely used mobile wallets in West Africa for payments and transfers."),
            ("MTN Mobile Money (MoMo)", "A major mobile wallet enabling payments, transfers, and merchant transactions."),
            ("Wave Mobile Money", "A fast-growing mobile money platform focused on low-cost transfers."),
        ],
    ),
    (
        "XAF",
        &[
            ("Afriland First Bank", "A leading bank in Central Africa offering retail and business banking."),
            ("BGFI Bank", "One of the largest regional banking groups operating widely across Central Africa."),
            ("Ecobank Cameroon", "A major bank offering retail, corporate, and digital services in the region."),
            ("UBA Cameroon", "A regional branch of United Bank for Africa offering modern banking services."),
            ("Société Générale Cameroun", "A major French-backed bank operating in Central Africa."),
            ("MTN Mobile Money", "A dominant mobile wallet for payments and remittances across Central Africa."),
            ("Airtel Money", "A leading digital wallet used for transfers, bills, and merchant payments."),
            ("Orange Money Central Africa", "A widely used mobile money service for payments and everyday transactions."),
        ],
    ),
    (
        "MUS",
        &[
            ("Mauritius Commercial Bank (MCB)", "The largest bank in Mauritius offering retail, corporate, and international services."),
            ("State Bank of Mauritius (SBM)", "A major Mauritian bank offering retail and business banking."),
            ("Bank One", "A leading bank in Mauritius providing modern banking and digital solutions."),
            ("AfrAsia Bank", "A private bank offering wealth management and business banking."),
            ("ABC Banking Corporation", "A dynamic bank focused on personal and SME banking services."),
            ("Juice by MCB", "Mauritius’ most popular digital wallet used for payments, bills, and transfers."),
            ("my.t Money", "A mobile wallet by Mauritius Telecom offering digital payments and top-ups."),
            ("SBM EasyPay", "A mobile payment service by SBM Bank."),
        ],
    ),
    (
        "MDV",
        &[
            ("Bank of Maldives (BML)", "The largest bank in the Maldives offering extensive financial services."),
            ("Maldives Islamic Bank (MIB)", "A major Islamic bank offering Sharia-compliant financial services."),
            ("The Mauritius Commercial Bank (Maldives)", "A foreign branch offering corporate and retail banking in the Maldives."),
            ("State Bank of India (Maldives Branch)", "A major foreign bank offering retail services in the Maldives."),
            ("BML MobilePay", "A leading digital wallet by Bank of Maldives for payments and transfers."),
            ("Ooredoo m-Faisaa", "A popular mobile wallet offering payments, transfers, and utility services."),
            ("DhiraaguPay", "A mobile payment service for QR transactions and online payments."),
        ],
    ),
    (
        "NOR",
        &[
            ("DNB ASA", "Norway’s largest financial services group offering retail, corporate, and investment banking."),
            ("Nordea Norway", "A major bank providing retail and corporate services in Norway."),
            ("SpareBank 1", "A group of savings banks offering retail banking and mortgage services."),
            ("Handelsbanken Norway", "A Swedish bank with strong operations in Norway for corporate and private banking."),
            ("Sbanken", "A fully digital bank in Norway offering modern online banking solutions."),
            ("Vipps", "Norway’s most popular mobile payment app for transfers, payments, and QR transactions."),
            ("Apple Pay Norway", "Widely used contactless payment service linked to Norwegian banks."),
            ("Google Pay Norway", "Mobile payment solution for online and in-store payments."),
        ],
    ),
    (
        "DNK",
        &[
            ("Danske Bank", "Denmark’s largest bank offering retail, corporate, and international banking."),
            ("Nordea Denmark", "A major bank with full digital and corporate banking services in Denmark."),
            ("Jyske Bank", "A Danish bank offering personal, corporate, and investment banking solutions."),
            ("Sydbank", "A large Danish bank providing retail and business banking services."),
            ("Nykredit Bank", "Denmark’s top mortgage lender and full-service financial institution."),
            ("MobilePay", "Denmark’s most widely used mobile payment app for P2P and merchant payments."),
            ("Apple Pay Denmark", "Contactless payment solution used in retail and online shopping."),
            ("Google Pay Denmark", "Mobile wallet used for in-store and online payments."),
        ],
    ),
    (
        "POL",
        &[
            ("PKO Bank Polski", "Poland’s largest bank offering retail, corporate, and investment banking."),
            ("Bank Pekao", "A major Polish bank providing comprehensive financial services nationwide."),
            ("mBank", "One of Poland’s leading digital banks offering innovative online banking services."),
            ("Santander Bank Polska", "A major international bank offering personal and corporate banking in Poland."),
            ("ING Bank Śląski", "A top bank in Poland known for retail, digital, and corporate banking solutions."),
            ("Blik", "Poland’s most popular mobile payment system supporting transfers and QR payments."),
            ("PayPal Poland", "Widely used for online payments and transfers."),
            ("Google Pay Poland", "Mobile wallet used for payments and digital purchases."),
        ],
    ),
    (
        "CZE",
        &[
            ("Česká spořitelna", "One of the largest Czech banks offering retail, corporate, and investment banking."),
            ("ČSOB", "A major bank in the Czech Republic providing personal and business financial services."),
            ("Komerční banka", "A top Czech bank offering retail and corporate banking, part of Société Générale."),
            ("Raiffeisenbank Czech Republic", "An international bank providing retail and corporate banking services."),
            ("Moneta Money Bank", "A growing bank in the Czech Republic focused on retail and digital banking."),
            ("Twisto", "A Czech e-wallet and payment app for online purchases and contactless payments."),
            ("mBank CZ Wallet", "Digital banking wallet for online and mobile transactions."),
            ("Google Pay Czech Republic", "Mobile wallet for payments, transfers, and online purchases."),
        ],
    ),
    (
        "HUN",
        &[
            ("OTP Bank", "Hungary’s largest bank offering retail, corporate, and digital banking services."),
            ("K&H Bank", "A major Hungarian bank providing personal and business financial services."),
            ("Erste Bank Hungary", "Part of Erste Group, offering retail and corporate banking solutions."),
            ("Raiffeisen Bank Hungary", "A leading bank in Hungary offering modern digital and traditional banking."),
            ("CIB Bank", "A top Hungarian bank providing full-service retail and corporate banking."),
            ("Simple by OTP", "Hungary’s leading digital banking app with wallet and payment services."),
            ("Revolut Hungary", "A digital banking and e-wallet solution popular in Hungary."),
            ("Google Pay Hungary", "Mobile wallet for in-store and online payments."),
        ],
    ),
    (
        "RUS",
        &[
            ("Sberbank", "Russia’s largest bank offering retail, corporate, and investment banking nationwide."),
            ("VTB Bank", "A major state-owned bank providing retail, corporate, and international financial services."),
            ("Gazprombank", "A leading Russian bank providing corporate and retail banking services."),
            ("Alfa-Bank", "One of Russia’s largest private banks offering modern digital and retail banking services."),
            ("Tinkoff Bank", "A fully digital bank in Russia known for online banking and e-wallet services."),
            ("Yandex Money (now YooMoney)", "A popular Russian e-wallet for online payments and transfers."),
            ("Qiwi Wallet", "Widely used digital wallet and payment service in Russia."),
            ("SberPay", "Digital wallet service offered by Sberbank for QR and online payments."),
        ],
    ),
    (
        "BRA",
        &[
            ("Banco do Brasil", "Brazil’s largest bank providing retail, corporate, and investment banking services."),
            ("Itaú Unibanco", "A major private Brazilian bank offering full-service banking and digital solutions."),
            ("Bradesco", "One of Brazil’s largest banks, offering retail and corporate banking nationwide."),
            ("Santander Brazil", "The Brazilian subsidiary of Santander, offering comprehensive financial services."),
            ("Caixa Econômica Federal", "A state-owned bank in Brazil known for retail banking and social programs."),
            ("PicPay", "Brazil’s most popular digital wallet offering payments, transfers, and QR transactions."),
            ("Mercado Pago", "Digital wallet by Mercado Libre for payments, QR, and online purchases."),
            ("Nubank Wallet", "Digital bank and wallet providing online payments and transfers in Brazil."),
        ],
    ),
    (
        "MEX",
        &[
            ("BBVA México", "A major bank in Mexico providing retail, corporate, and digital banking services."),
            ("Banorte", "One of Mexico’s largest banks offering retail, corporate, and investment banking."),
            ("Santander Mexico", "A large international bank offering personal and corporate banking solutions in Mexico."),
            ("HSBC Mexico", "A multinational bank providing full banking services in Mexico."),
            ("Scotiabank Mexico", "A leading Canadian bank offering banking services across Mexico."),
            ("Mercado Pago Mexico", "Digital wallet used for payments, transfers, and e-commerce in Mexico."),
            ("Clip Wallet", "A mobile wallet and card reader solution widely used for retail payments in Mexico."),
            ("BBVA Wallet Mexico", "Digital wallet provided by BBVA for online and contactless payments."),
        ],
    ),
    (
        "ARG",
        &[
            ("Banco de la Nación Argentina", "Argentina’s largest state-owned bank offering retail and corporate banking."),
            ("Banco Galicia", "A major private bank in Argentina offering digital and traditional banking services."),
            ("Banco Santander Río", "A leading bank in Argentina part of Santander Group providing full-service banking."),
            ("BBVA Argentina", "A major private bank offering retail and corporate banking solutions in Argentina."),
            ("Banco Macro", "A large Argentine bank providing services to individuals and businesses nationwide."),
            ("Mercado Pago Argentina", "One of Argentina’s most popular digital wallets for payments and transfers."),
            ("Ualá", "A mobile wallet and digital bank used widely for online payments and card services."),
            ("Todo Pago", "A digital payment platform enabling QR, online, and in-store transactions in Argentina."),
        ],
    ),
    (
        "CHL",
        &[
            ("Banco de Chile", "One of Chile’s largest banks offering retail, corporate, and investment banking services."),
            ("Banco Santander Chile", "A leading international bank providing comprehensive banking services in Chile."),
            ("BancoEstado", "The state-owned bank offering financial services to individuals and businesses nationwide."),
            ("Banco BCI", "A major private bank in Chile offering retail, corporate, and digital banking."),
            ("Scotiabank Chile", "A branch of the Canadian bank providing retail and commercial banking in Chile."),
            ("Mercado Pago Chile", "A popular digital wallet for online and in-store payments."),
            ("Mach", "A Chilean digital wallet offering transfers, payments, and savings features."),
            ("Flow Chile", "A widely used e-wallet for online payments and QR transactions."),
        ],
    ),
    (
        "COL",
        &[
            ("Bancolombia", "Colombia’s largest bank offering retail, corporate, and investment banking."),
            ("Banco de Bogotá", "A major Colombian bank providing personal, corporate, and international banking services."),
            ("Davivienda", "A leading bank in Colombia known for retail banking and digital services."),
            ("BBVA Colombia", "A major international bank offering full-service banking in Colombia."),
            ("Banco Popular", "A Colombian bank providing retail and SME banking services."),
            ("Nequi", "A widely used Colombian mobile wallet for payments, transfers, and bills."),
            ("Daviplata", "A digital wallet by Davivienda for P2P transfers and online payments."),
            ("Movii", "A Colombian e-wallet offering payments, transfers, and online transactions."),
        ],
    ),
    (
        "PER",
        &[
            ("Banco de Crédito del Perú (BCP)", "The largest bank in Peru offering retail, corporate, and investment banking services."),
            ("BBVA Perú", "A major private bank in Peru offering digital, retail, and corporate banking solutions."),
            ("Scotiabank Perú", "Canadian bank providing full banking services in Peru."),
            ("Interbank", "A leading Peruvian bank known for retail and digital banking solutions."),
            ("Banco Pichincha Perú", "A commercial bank offering personal and business banking services in Peru."),
            ("Yape", "Peru’s most popular e-wallet for QR payments, transfers, and bill payments."),
            ("Plin", "A digital wallet used for instant transfers and payments in Peru."),
            ("Tunki", "A mobile banking and wallet app offered by BBVA Peru for payments and money transfers."),
        ],
    ),
    (
        "URY",
        &[
            ("Banco República (BROU)", "Uruguay’s largest state-owned bank offering retail and corporate banking."),
            ("Banco Santander Uruguay", "A major international bank providing full banking services in Uruguay."),
            ("BBVA Uruguay", "A leading private bank in Uruguay offering digital and traditional banking."),
            ("Itaú Uruguay", "A top private bank providing retail and corporate banking services."),
            ("Scotiabank Uruguay", "A Canadian bank branch providing personal and business banking in Uruguay."),
            ("Banred Wallet", "A popular Uruguayan e-wallet for online payments and transfers."),
            ("Redpagos Mobile", "Digital wallet for payments and QR-based transactions."),
            ("Mercado Pago Uruguay", "A widely used digital wallet integrated with Mercado Libre for payments."),
        ],
    ),
    (
        "DOM",
        &[
            ("Banco Popular Dominicano", "The largest bank in the Dominican Republic offering retail and corporate banking."),
            ("Banco BHD León", "A leading bank providing personal, business, and digital banking services."),
            ("Scotiabank Dominican Republic", "A branch of the Canadian bank offering full banking services in the DR."),
            ("Banco del Progreso", "A local bank offering retail and SME banking services."),
            ("Banreservas", "State-owned bank offering nationwide banking services."),
            ("BHD Wallet", "Digital wallet by BHD León for online payments and transfers."),
            ("Teke Wallet", "A mobile wallet used in the Dominican Republic for payments and transfers."),
            ("Mercado Pago DR", "Digital wallet integrated with Mercado Libre for payments and purchases."),
        ],
    ),
    (
        "PRY",
        &[
            ("Banco Nacional de Fomento (BNF)", "Paraguay’s state-owned bank providing retail, agricultural, and corporate banking."),
            ("Banco Familiar", "A major private bank in Paraguay offering personal and business banking services."),
            ("Banco Itaú Paraguay", "A regional branch of Itaú offering full-service banking in Paraguay."),
            ("Banco Continental", "A leading Paraguayan bank providing retail and corporate banking solutions."),
            ("Banco Regional", "A bank offering commercial and personal banking services in Paraguay."),
            ("Billetera Personal BNF", "Digital wallet service offered by BNF for payments and transfers."),
            ("Tigo Money", "A mobile wallet used in Paraguay for transfers and payments."),
            ("Bancard Wallet", "Digital wallet for online and merchant payments in Paraguay."),
        ],
    ),
    (
        "BOL",
        &[
            ("Banco de Crédito de Bolivia", "A major Bolivian bank offering retail and corporate banking services."),
            ("Banco Nacional de Bolivia (BNB)", "One of Bolivia’s largest banks providing full-service banking nationwide."),
            ("Banco Mercantil Santa Cruz", "A top private bank offering digital, corporate, and retail banking."),
            ("Banco BISA", "A major Bolivian bank providing personal and business banking services."),
            ("Banco Fortaleza", "A growing private bank in Bolivia focusing on SMEs and retail clients."),
            ("Tigo Money Bolivia", "A mobile wallet widely used for payments, top-ups, and transfers."),
            ("Billetera BNB", "Digital wallet service provided by Banco Nacional de Bolivia for payments and transfers."),
            ("PagoMovil Bolivia", "A mobile wallet for digital transactions and QR payments."),
        ],
    ),
    (
        "VEN",
        &[
            ("Banco de Venezuela", "State-owned bank providing retail and corporate banking services across Venezuela."),
            ("Banesco Banco Universal", "One of Venezuela’s largest private banks offering full banking services."),
            ("Banco Mercantil", "A major Venezuelan bank providing personal, business, and online banking."),
            ("Banco Provincial", "A leading private bank in Venezuela focusing on retail and digital services."),
            ("Banco Exterior", "A commercial bank offering corporate and personal banking solutions."),
            ("Pago Móvil", "Venezuela’s most widely used mobile payment system for transfers and bills."),
            ("Mercado Pago Venezuela", "Digital wallet integrated with Mercado Libre for online purchases."),
            ("Zelle Venezuela", "Popular international digital wallet for P2P transfers in USD via local banks."),
        ],
    ),
    (
        "PAK",
        &[
            ("Habib Bank Limited (HBL)", "Pakistan’s largest bank offering retail, corporate, and international banking."),
            ("United Bank Limited (UBL)", "A major Pakistani bank providing personal, business, and digital banking services."),
            ("MCB Bank", "A leading bank in Pakistan offering comprehensive financial solutions."),
            ("Allied Bank", "A large bank providing retail, corporate, and SME banking services."),
            ("Bank Alfalah", "A major private bank offering modern digital banking services."),
            ("Easypaisa", "Pakistan’s largest mobile wallet and branchless banking service."),
            ("JazzCash", "A widely used mobile wallet for payments, transfers, and bills."),
            ("UPaisa", "Digital wallet offering online payments and P2P transfers in Pakistan."),
        ],
    ),
    (
        "BGD",
        &[
            ("BRAC Bank", "A leading private bank in Bangladesh offering retail, SME, and corporate banking."),
            ("Dutch-Bangla Bank", "A top bank in Bangladesh known for digital banking and widespread ATM network."),
            ("Standard Chartered Bank Bangladesh", "A multinational bank providing full-service banking in Bangladesh."),
            ("Islami Bank Bangladesh", "The largest Islamic bank in Bangladesh offering Sharia-compliant financial services."),
            ("Prime Bank", "A private commercial bank offering personal, corporate, and digital banking."),
            ("bKash", "Bangladesh’s leading mobile wallet used for payments, transfers, and merchant services."),
            ("Nagad", "A digital wallet and mobile banking service for money transfers and payments."),
            ("Rocket by Dutch-Bangla Bank", "A popular mobile wallet and branchless banking service in Bangladesh."),
        ],
    ),
    (
        "LKA",
        &[
            ("Bank of Ceylon", "Sri Lanka’s largest state-owned bank providing retail and corporate banking services."),
            ("Commercial Bank of Ceylon", "A leading private bank offering personal, corporate, and digital banking services."),
            ("Hatton National Bank (HNB)", "A top private bank providing retail, corporate, and online banking solutions."),
            ("Sampath Bank", "A major bank in Sri Lanka known for modern banking and digital services."),
            ("People’s Bank", "State-owned bank offering financial services to individuals and businesses nationwide."),
            ("ezCash", "Sri Lanka’s most popular mobile wallet for payments, transfers, and top-ups."),
            ("mCash", "A digital wallet enabling mobile payments and online transactions."),
            ("FriMi", "Digital banking and wallet app offering payments and transfers in Sri Lanka."),
        ],
    ),
    (
        "NPL",
        &[
            ("Nepal Investment Bank", "One of Nepal’s largest banks offering retail and corporate banking services."),
            ("Standard Chartered Bank Nepal", "A multinational bank providing full-service banking in Nepal."),
            ("Nabil Bank", "A leading private bank in Nepal offering modern digital and retail banking."),
            ("Himalayan Bank", "A top bank providing personal, corporate, and SME banking in Nepal."),
            ("Everest Bank", "A private bank offering comprehensive banking and digital services in Nepal."),
            ("eSewa", "Nepal’s most popular digital wallet for payments, money transfers, and bills."),
            ("IME Pay", "A widely used mobile wallet offering online payments and remittances."),
            ("Khalti", "Digital payment platform for QR payments, bills, and top-ups in Nepal."),
        ],
    ),
    (
        "MMR",
        &[
            ("Kanbawza Bank (KBZ)", "Myanmar’s largest private bank offering retail, corporate, and digital banking services."),
            ("Ayeyarwady Bank (AYA Bank)", "A major private bank providing personal and business banking solutions."),
            ("CB Bank", "A leading bank in Myanmar offering modern banking and digital services."),
            ("Myanmar Economic Bank (MEB)", "State-owned bank providing financial services nationwide."),
            ("Yoma Bank", "A private bank offering corporate, retail, and SME banking in Myanmar."),
            ("Wave Money", "The most widely used mobile wallet in Myanmar for transfers, payments, and bills."),
            ("KBZPay", "Digital wallet offered by KBZ Bank for payments and remittances."),
            ("AYA Pay", "Mobile wallet service provided by AYA Bank for digital payments."),
        ],
    ),
    (
        "KHM",
        &[
            ("ACLEDA Bank", "Cambodia’s largest commercial bank offering retail, SME, and corporate banking services."),
            ("Canadia Bank", "A major bank in Cambodia providing personal, corporate, and digital banking."),
            ("Foreign Trade Bank of Cambodia (FTB)", "A leading bank focused on international trade and commercial banking."),
            ("ABA Bank", "A fast-growing bank in Cambodia known for digital banking and e-wallet services."),
            ("Cambodia Commercial Bank", "Provides retail, corporate, and SME banking services across Cambodia."),
            ("Pi Pay", "One of Cambodia’s most popular digital wallets for payments and transfers."),
            ("ABA Mobile", "Digital wallet offered by ABA Bank for online and QR payments."),
            ("Wing Money", "Mobile wallet and payment service widely used in Cambodia for transfers and bills."),
        ],
    ),
    (
        "LAO",
        &[
            ("Banque pour le Commerce Extérieur Lao (BCEL)", "The largest bank in Laos providing retail, corporate, and trade banking."),
            ("ACLEDA Bank Laos", "A major private bank offering retail, SME, and digital banking services."),
            ("Lao Development Bank", "State-owned bank providing commercial banking services across Laos."),
            ("Sathapana Bank Laos", "Bank offering retail and business banking solutions in Laos."),
            ("Phongsavanh Bank", "A growing private bank offering personal and corporate financial services."),
            ("BCEL One", "Digital wallet by BCEL for online payments, transfers, and bill payments."),
            ("Wing Laos", "Mobile wallet and payment service widely used in Laos."),
            ("ACLEDA Unity Mobile", "Mobile banking app for payments and digital transactions in Laos."),
        ],
    ),
    (
        "NGA",
        &[
            ("Access Bank", "One of Nigeria’s largest banks offering retail, corporate, and digital banking services."),
            ("Zenith Bank", "A leading Nigerian bank providing personal, corporate, and investment banking."),
            ("Guaranty Trust Bank (GTB)", "A top Nigerian bank known for retail and digital banking services."),
            ("First Bank of Nigeria", "Nigeria’s oldest bank offering comprehensive banking solutions nationwide."),
            ("United Bank for Africa (UBA)", "A pan-African bank providing services across multiple countries including Nigeria."),
            ("Paga", "Nigeria’s most popular mobile wallet for payments, transfers, and bills."),
            ("Opay", "Digital wallet offering payments, money transfers, and ride-hailing services in Nigeria."),
            ("Kuda Bank Wallet", "A fully digital bank and wallet service providing easy online payments."),
        ],
    ),
    (
        "KEN",
        &[
            ("Equity Bank", "Kenya’s largest bank providing retail, corporate, and digital banking services."),
            ("KCB Bank", "A leading bank in Kenya offering full-service banking and financial solutions."),
            ("Co-operative Bank of Kenya", "A major Kenyan bank serving retail, corporate, and SME clients."),
            ("Standard Chartered Kenya", "International bank providing personal, business, and digital banking."),
            ("NIC Bank", "A mid-sized bank offering retail and corporate banking solutions."),
            ("M-Pesa", "Kenya’s most popular mobile wallet for payments, transfers, and micro-financing."),
            ("Equitel", "Mobile banking and wallet service by Equity Bank for seamless transactions."),
            ("KCB Mobi", "Digital wallet provided by KCB for payments, transfers, and online banking."),
        ],
    ),
    (
        "GHA",
        &[
            ("GCB Bank", "One of Ghana’s largest state-owned banks providing retail and corporate banking."),
            ("Ecobank Ghana", "A pan-African bank offering personal, corporate, and digital banking services."),
            ("Stanbic Bank Ghana", "Part of Standard Bank Group, providing full-service banking in Ghana."),
            ("Access Bank Ghana", "Private bank offering modern banking and digital services."),
            ("UBA Ghana", "Part of United Bank for Africa, offering retail and corporate banking in Ghana."),
            ("MTN Mobile Money (MoMo)", "Ghana’s leading mobile wallet for payments, transfers, and bills."),
            ("AirtelTigo Money", "Mobile wallet service for payments, top-ups, and transfers in Ghana."),
            ("Zeepay Wallet", "Digital wallet for remittances, payments, and QR-based transactions in Ghana."),
        ],
    ),
    (
        "MAR",
        &[
            ("Attijariwafa Bank", "Morocco’s largest bank offering retail, corporate, and international banking services."),
            ("Banque Populaire", "A major Moroccan bank providing personal and business banking solutions."),
            ("BMCE Bank", "One of Morocco’s top banks offering retail and corporate banking services."),
            ("Société Générale Maroc", "A branch of Société Générale providing full banking services in Morocco."),
            ("Crédit du Maroc", "Major bank offering personal, business, and investment banking services."),
            ("M-Wallet Maroc", "Digital wallet for mobile payments, transfers, and bill payments in Morocco."),
            ("Inwi Money", "Mobile wallet solution for payments and transfers in Morocco."),
            ("Orange Money Morocco", "Mobile wallet service for sending money, paying bills, and online payments."),
        ],
    ),
    (
        "TUN",
        &[
            ("Banque de Tunisie", "One of Tunisia’s oldest banks providing retail and corporate banking services."),
            ("Banque Internationale Arabe de Tunisie (BIAT)", "The largest private bank in Tunisia offering full banking services."),
            ("Attijari Bank Tunisia", "A leading bank providing personal, corporate, and digital banking solutions."),
            ("Société Tunisienne de Banque (STB)", "State-owned bank offering nationwide retail and corporate banking."),
            ("Amen Bank", "Private Tunisian bank offering retail and business banking services."),
            ("eDinar", "Digital wallet in Tunisia for mobile payments, transfers, and bills."),
            ("D17 Wallet", "A mobile wallet widely used in Tunisia for online and in-store payments."),
            ("Orange Money Tunisia", "Mobile wallet solution for payments and money transfers."),
        ],
    ),
    (
        "ETH",
        &[
            ("Commercial Bank of Ethiopia (CBE)", "Ethiopia’s largest state-owned bank providing retail, corporate, and trade banking services."),
            ("Dashen Bank", "A leading private bank in Ethiopia offering retail, corporate, and digital banking services."),
            ("Awash Bank", "A major private bank providing personal, SME, and corporate banking in Ethiopia."),
            ("Bank of Abyssinia", "Private bank offering modern banking and digital services across Ethiopia."),
            ("NIB International Bank", "A growing bank providing commercial and personal banking solutions in Ethiopia."),
            ("HelloCash", "Ethiopia’s most popular mobile wallet for payments, transfers, and bill payments."),
            ("M-BIRR", "Mobile money service for payments, remittances, and transfers in Ethiopia."),
            ("Amole", "Digital wallet offered by Commercial Bank of Ethiopia for online payments and transfers."),
        ],
    ),
    (
        "DZA",
        &[
            ("Banque Nationale d’Algérie (BNA)", "State-owned bank offering retail and corporate banking services across Algeria."),
            ("Banque Extérieure d’Algérie (BEA)", "Major Algerian bank providing personal, business, and international banking services."),
            ("Banque de l’Agriculture et du Développement Rural (BADR)", "Bank focused on agriculture and rural development in Algeria."),
            ("Société Générale Algérie", "Branch of Société Générale providing retail and corporate banking in Algeria."),
            ("CNEP Banque", "Algerian bank offering personal and business banking solutions nationwide."),
            ("BaridiMob", "Mobile wallet service by Algeria Post for payments, transfers, and bills."),
            ("E-Dinar Algeria", "Digital wallet platform for online payments and QR transactions in Algeria."),
            ("Mobilis Wallet", "Telecom-based mobile wallet widely used for payments and transfers in Algeria."),
        ],
    ),
    (
        "UKR",
        &[
            ("PrivatBank", "Ukraine’s largest bank offering retail, corporate, and digital banking services."),
            ("Oschadbank", "State-owned bank providing personal and business banking across Ukraine."),
            ("Raiffeisen Bank Aval", "A major international bank providing retail and corporate banking services in Ukraine."),
            ("Ukrsibbank", "A top Ukrainian bank offering full banking services and digital solutions."),
            ("Alfa-Bank Ukraine", "Private bank providing personal, corporate, and online banking in Ukraine."),
            ("Privat24", "Digital wallet and mobile banking app by PrivatBank for payments, transfers, and QR payments."),
            ("Monobank", "Ukraine’s first fully digital bank providing mobile wallet and banking services."),
            ("Portmone", "Digital wallet used for online payments, bills, and transfers in Ukraine."),
        ],
    ),
    (
        "ROU",
        &[
            ("Banca Transilvania", "Romania’s largest bank offering retail, corporate, and digital banking services."),
            ("BRD – Groupe Société Générale", "A major bank providing full-service banking in Romania."),
            ("BCR (Banca Comercială Română)", "A leading Romanian bank offering retail, corporate, and investment services."),
            ("Raiffeisen Bank Romania", "International bank providing retail and corporate banking solutions in Romania."),
            ("ING Bank Romania", "Digital and traditional banking services provided by ING in Romania."),
            ("Revolut Romania", "Digital wallet and banking app offering payments and transfers in Romania."),
            ("Orange Money Romania", "Mobile wallet for payments, QR transactions, and transfers."),
            ("PayU Wallet", "Digital payment platform for online purchases and mobile payments in Romania."),
        ],
    ),
    (
        "BGR",
        &[
            ("UniCredit Bulbank", "The largest bank in Bulgaria providing retail, corporate, and investment banking services."),
            ("DSK Bank", "Major Bulgarian bank offering personal, SME, and corporate banking."),
            ("First Investment Bank (Fibank)", "Private bank providing retail and business banking services in Bulgaria."),
            ("Raiffeisenbank Bulgaria", "International bank offering full-service banking in Bulgaria."),
            ("Postbank (Eurobank Bulgaria)", "A major bank in Bulgaria providing retail and corporate banking solutions."),
            ("Pay by Vivacom", "Digital wallet and mobile payment solution in Bulgaria."),
            ("ePay.bg", "Widely used electronic wallet for payments, transfers, and online transactions."),
            ("Revolut Bulgaria", "Digital wallet app offering payments, transfers, and multi-currency support."),
        ],
    ),
    (
        "SRB",
        &[
            ("Banca Intesa Beograd", "One of Serbia’s largest banks offering retail, corporate, and digital banking services."),
            ("Komercijalna Banka", "Leading Serbian bank providing personal, SME, and corporate banking."),
            ("UniCredit Bank Serbia", "International bank offering retail, corporate, and investment banking solutions in Serbia."),
            ("Raiffeisen Bank Serbia", "Part of the Raiffeisen Group, providing full banking services in Serbia."),
            ("OTP Bank Serbia", "A private bank offering retail, corporate, and digital banking in Serbia."),
            ("mCash Serbia", "A mobile wallet and payment platform widely used in Serbia."),
            ("PayPal", "Global digital wallet supporting online payments for Serbian users."),
            ("Revolut", "Digital bank and wallet offering international banking and money transfers."),
        ],
    ),
    (
        "ISL",
        &[
            ("Landsbankinn", "One of Iceland’s largest banks offering retail, corporate, and digital banking."),
            ("Arion Bank", "A major Icelandic bank providing personal and business banking solutions."),
            ("Íslandsbanki", "Leading bank in Iceland offering full banking services and online banking."),
            ("Kvika Bank", "A bank specializing in investment, corporate, and digital banking in Iceland."),
            ("Valitor", "Icelandic payment solutions provider and digital wallet for online and in-store payments."),
            ("Revolut", "Digital bank and wallet offering international banking and money transfers for Icelandic users."),
            ("Apple Pay", "Mobile payment and digital wallet available in Iceland for iOS users."),
        ],
    ),
    (
        "BLR",
        &[
            ("Belinvestbank", "One of Belarus’s largest banks providing retail, corporate, and investment banking services."),
            ("Belarusbank", "State-owned bank offering full banking services across Belarus."),
            ("Priorbank", "A leading private bank in Belarus offering retail, corporate, and digital banking."),
            ("BPS-Sberbank", "Belarusian branch of Sberbank providing financial services nationwide."),
            ("Yandex Money (YooMoney)", "Digital wallet and payment platform accessible in Belarus."),
            ("WebMoney", "International digital payment system and wallet widely used in Belarus."),
            ("Revolut", "Digital banking and wallet service offering international transfers for Belarusian users."),
        ],
    ),
    (
        "FJI",
        &[
            ("Bank of Fiji", "The central bank of Fiji providing regulatory and limited banking services."),
            ("ANZ Fiji", "Part of ANZ Group offering personal, corporate, and digital banking services in Fiji."),
            ("Westpac Fiji", "A major bank providing retail, business, and online banking across Fiji."),
            ("BSP Fiji", "Bank of South Pacific branch offering full-service banking in Fiji."),
            ("Fijipay", "Local mobile wallet for payments, transfers, and bills in Fiji."),
            ("PayPal", "Global digital wallet for online payments accessible in Fiji."),
            ("Revolut", "Digital bank and wallet for international money transfers and payments."),
        ],
    ),
    (
        "PNG",
        &[
            ("Bank of Papua New Guinea", "Central bank of Papua New Guinea providing regulatory and limited banking services."),
            ("ANZ PNG", "Branch of ANZ Group offering retail, corporate, and digital banking in Papua New Guinea."),
            ("Westpac PNG", "A major bank providing personal and business banking services in PNG."),
            ("Bank South Pacific (BSP)", "Largest bank in PNG offering comprehensive banking and digital services."),
            ("BSP Mobile Banking", "Digital wallet and banking app offered by Bank South Pacific."),
            ("PayPal", "Global online payment platform accessible in Papua New Guinea."),
            ("Revolut", "Digital banking and wallet service offering international transfers and payments for PNG users."),
        ],
    ),
    (
        "JAM",
        &[
            ("National Commercial Bank (NCB)", "Jamaica’s largest bank offering retail, corporate, and digital banking services."),
            ("Scotiabank Jamaica", "A major international bank providing full-service banking and digital solutions in Jamaica."),
            ("First Global Bank", "Private bank offering retail, corporate, and wealth management services."),
            ("Bank of Nova Scotia Jamaica", "International bank branch offering personal, business, and online banking services."),
            ("JMMB Money", "Digital wallet and mobile payment service available in Jamaica."),
            ("PayPal", "Global digital wallet accessible for online payments in Jamaica."),
            ("Revolut", "Digital banking and wallet service offering international transfers and payments."),
        ],
    ),
    (
        "CRI",
        &[
            ("Banco Nacional de Costa Rica", "State-owned bank providing retail, corporate, and international banking services."),
            ("Banco de Costa Rica", "One of Costa Rica’s oldest banks offering full banking services."),
            ("Scotiabank Costa Rica", "International bank providing retail, corporate, and digital banking in Costa Rica."),
            ("BAC Credomatic", "Central American bank offering personal, business, and online banking solutions."),
            ("SINPE Móvil", "Costa Rica’s mobile wallet platform for payments, transfers, and bill payments."),
            ("PayPal", "Global digital wallet for online payments accessible in Costa Rica."),
            ("Revolut", "Digital banking and wallet service offering international transfers and payments."),
        ],
    ),
    (
        "GTM",
        &[
            ("Banco Industrial", "Guatemala’s largest private bank offering retail, corporate, and digital banking services."),
            ("Banco G&T Continental", "Major Guatemalan bank providing full-service banking solutions."),
            ("Banrural", "A top bank in Guatemala offering personal, corporate, and rural banking services."),
            ("BAC Credomatic Guatemala", "Central American bank providing retail and corporate banking and digital services."),
            ("Tigo Money", "Guatemala’s mobile wallet for payments, transfers, and bills."),
            ("PayPal", "Global online payment platform accessible in Guatemala."),
            ("Revolut", "Digital banking and wallet service for international transfers and payments."),
        ],
    ),
    (
        "XDR",
        &[
            ("International Monetary Fund (IMF)", "An international organization that issues SDRs and provides financial support and policy advice globally."),
            ("World Bank", "Provides global financial support and development assistance; participates in SDR allocations."),
            ("No direct e-wallets", "SDRs are a reserve asset, not used in consumer e-wallets; they are managed through IMF accounts."),
        ],
    ),
    (
        "KWT",
        &[
            ("National Bank of Kuwait (NBK)", "Kuwait’s largest bank offering retail, corporate, and international banking services."),
            ("Gulf Bank", "Major Kuwaiti bank providing personal, business, and online banking solutions."),
            ("Kuwait Finance House (KFH)", "Islamic bank offering retail and corporate banking services in Kuwait."),
            ("Boubyan Bank", "Islamic bank providing personal, SME, and corporate banking solutions in Kuwait."),
            ("Commercial Bank of Kuwait (CBK)", "Private bank offering full-service banking and digital solutions."),
            ("K-Net Wallet", "Kuwait’s mobile and digital wallet for payments, transfers, and bills."),
            ("Google Pay", "Mobile wallet and payment service accessible in Kuwait for online and in-store payments."),
            ("Apple Pay", "Mobile payment and digital wallet service available in Kuwait for iOS users."),
            ("PayPal", "Global digital wallet for international and online payments."),
        ],
    ),
    (
        "QAT",
        &[
            ("Qatar National Bank (QNB)", "Qatar’s largest bank offering retail, corporate, and international banking services."),
            ("Doha Bank", "Major Qatari bank providing personal, business, and digital banking solutions."),
            ("Commercial Bank of Qatar", "Private bank offering full-service banking and online banking in Qatar."),
            ("Masraf Al Rayan", "Islamic bank providing Sharia-compliant retail and corporate banking services in Qatar."),
            ("Qatar Islamic Bank (QIB)", "Leading Islamic bank offering personal, corporate, and investment banking in Qatar."),
            ("Ooredoo Money", "Mobile wallet and digital payment solution widely used in Qatar."),
            ("QPay", "Qatar-based digital wallet for payments, transfers, and online transactions."),
            ("Google Pay", "Mobile wallet and payment service available in Qatar."),
            ("Apple Pay", "Digital wallet service accessible for iOS users in Qatar."),
        ],
    ),
    (
        "OMN",
        &[
            ("Bank Muscat", "Oman’s largest bank offering retail, corporate, and investment banking services."),
            ("National Bank of Oman (NBO)", "Major Omani bank providing full-service banking and digital solutions."),
            ("Bank Dhofar", "Private bank offering personal, corporate, and online banking services in Oman."),
            ("HSBC Oman", "International bank providing retail and corporate banking solutions in Oman."),
            ("OmanPay", "National digital payment and e-wallet platform for mobile and online transactions."),
            ("Google Pay", "Mobile wallet and online payment solution available in Oman."),
            ("Apple Pay", "Digital wallet for iOS users in Oman for payments and transfers."),
        ],
    ),
    (
        "BHR",
        &[
            ("National Bank of Bahrain (NBB)", "One of Bahrain’s largest banks offering retail, corporate, and investment banking services."),
            ("Ahli United Bank", "Leading Bahraini bank providing personal, corporate, and digital banking services."),
            ("Bahrain Islamic Bank", "Islamic bank offering Sharia-compliant personal and business banking in Bahrain."),
            ("Gulf International Bank (GIB)", "Major regional bank providing corporate and investment banking solutions."),
            ("BenefitPay", "Bahrain’s national mobile wallet for payments, transfers, and bills."),
            ("Google Pay", "Mobile wallet and payment platform available in Bahrain."),
            ("Apple Pay", "Digital wallet for iOS users in Bahrain for online and in-store payments."),
        ],
    ),
    (
        "JOR",
        &[
            ("Arab Bank", "Jordan’s largest bank and one of the biggest in the Middle East, providing retail, corporate, and digital banking services."),
            ("Bank of Jordan", "Major private bank offering personal, business, and online banking solutions."),
            ("Jordan Ahli Bank", "Private bank providing retail, corporate, and investment banking services."),
            ("Cairo Amman Bank", "Bank offering personal, SME, and corporate banking solutions in Jordan."),
            ("eFAWATEERcom", "Jordanian digital payment and bill payment platform widely used in the country."),
            ("Google Pay", "Mobile wallet and payment service accessible in Jordan."),
            ("Apple Pay", "Digital wallet for iOS users in Jordan for payments and transfers."),
        ],
    ),
    (
        "KAZ",
        &[
            ("Halyk Bank", "Largest bank in Kazakhstan providing retail, corporate, and investment banking services."),
            ("Kazkommertsbank (KKB)", "Major bank offering personal, business, and online banking solutions."),
            ("Sberbank Kazakhstan", "Part of Sberbank Group, providing retail and corporate banking in Kazakhstan."),
            ("ATF Bank", "Private bank offering comprehensive banking and digital services across Kazakhstan."),
            ("Kaspi.kz", "Leading Kazakh digital wallet for payments, transfers, and online shopping."),
            ("Halyk Wallet", "Mobile wallet app by Halyk Bank for payments and transfers."),
            ("Google Pay", "Mobile payment solution available in Kazakhstan."),
            ("Apple Pay", "Digital wallet for iOS users in Kazakhstan."),
        ],
    ),
];

fn local_banks(key: &str) -> Option<&'static [BankSeed]> {
    if key.is_empty() {
        return None;
    }
    COUNTRY_BANKS
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(key))
        .map(|(_, banks)| *banks)
}

/// Global banks followed by the local ones for `alpha3`, without repeated names
pub fn banks_for(alpha3: Option<&str>) -> Vec<BankSeed> {
    merge(alpha3.and_then(local_banks).unwrap_or(&[]))
}

/// Banks for a branch currency: local list by alpha-3, then by currency code
pub fn banks_for_currency(iso_3166_alpha3: &str, currency_code: &str) -> Vec<BankSeed> {
    let local = local_banks(iso_3166_alpha3)
        .or_else(|| local_banks(currency_code))
        .unwrap_or(&[]);
    merge(local)
}

fn merge(local: &[BankSeed]) -> Vec<BankSeed> {
    let mut out: Vec<BankSeed> = Vec::with_capacity(GLOBAL_BANKS.len() + local.len());
    for bank in GLOBAL_BANKS.iter().chain(local.iter()) {
        if !out.iter().any(|(name, _)| *name == bank.0) {
            out.push(*bank);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_country_gets_global_list() {
        assert_eq!(banks_for(Some("ATA")).len(), GLOBAL_BANKS.len());
        assert_eq!(banks_for(None).len(), GLOBAL_BANKS.len());
    }

    #[test]
    fn test_philippine_banks_are_added() {
        let banks = banks_for(Some("PHL"));
        assert!(banks.len() > GLOBAL_BANKS.len());
        assert!(banks.iter().any(|(name, _)| *name == "BDO Unibank"));
        assert!(banks.iter().any(|(name, _)| *name == "GCash"));
    }

    #[test]
    fn test_duplicate_names_are_dropped() {
        // "Bank of America" is both global and a US bank
        let banks = banks_for(Some("USA"));
        let count = banks
            .iter()
            .filter(|(name, _)| *name == "Bank of America")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_cfa_branch_resolves_by_currency_code() {
        let banks = banks_for_currency("", "XOF");
        assert!(banks.len() > GLOBAL_BANKS.len());
        assert_eq!(banks_for_currency("", "XXX").len(), GLOBAL_BANKS.len());
    }

    #[test]
    fn test_every_seeded_currency_has_local_banks() {
        for currency in crate::seed::currency::CURRENCIES {
            let local = local_banks(currency.iso_3166_alpha3)
                .or_else(|| local_banks(currency.currency_code));
            assert!(local.is_some(), "{}", currency.currency_code);
        }
    }

    #[test]
    fn test_every_bank_table_has_a_currency() {
        for (code, banks) in COUNTRY_BANKS {
            assert!(!banks.is_empty(), "{}", code);
            assert!(
                crate::seed::currency::CURRENCIES
                    .iter()
                    .any(|c| c.iso_3166_alpha3 == *code || c.currency_code == *code),
                "{}",
                code
            );
        }
    }
}
