//! Bank registry: three-digit institution codes assigned by Banxico.
//!
//! The first three digits of every CLABE identify the issuing institution.
//! The table mirrors the published list of participants in the SPEI
//! interbank network; codes that are not listed are treated as unknown.

use serde::Serialize;

/// A registered financial institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bank {
    /// Institution code (1–999), as encoded in the first three CLABE digits.
    pub code: u16,
    /// Commercial short name (e.g. "BANAMEX").
    pub short_name: &'static str,
    /// Registered legal name.
    pub full_name: &'static str,
}

impl Bank {
    const fn new(code: u16, short_name: &'static str, full_name: &'static str) -> Self {
        Self {
            code,
            short_name,
            full_name,
        }
    }
}

/// Look up a bank by its numeric code.
///
/// Returns `None` when the code is not registered.
pub fn lookup_bank(code: u16) -> Option<&'static Bank> {
    BANKS
        .binary_search_by_key(&code, |bank| bank.code)
        .ok()
        .map(|idx| &BANKS[idx])
}

/// All registered banks, ordered by code.
pub fn banks() -> &'static [Bank] {
    BANKS
}

/// Registered institutions (102 entries).
/// Sorted by code for binary search.
static BANKS: &[Bank] = &[
    Bank::new(2, "BANAMEX", "Banco Nacional de México, S.A."),
    Bank::new(6, "BANCOMEXT", "Banco Nacional de Comercio Exterior"),
    Bank::new(9, "BANOBRAS", "Banco Nacional de Obras y Servicios Públicos"),
    Bank::new(12, "BBVA BANCOMER", "BBVA Bancomer, S.A."),
    Bank::new(14, "SANTANDER", "Banco Santander, S.A."),
    Bank::new(19, "BANJERCITO", "Banco Nacional del Ejército, Fuerza Aérea y Armada"),
    Bank::new(21, "HSBC", "HSBC México, S.A."),
    Bank::new(22, "GE MONEY", "GE Money Bank, S.A."),
    Bank::new(30, "BAJÍO", "Banco del Bajío, S.A."),
    Bank::new(32, "IXE", "IXE Banco, S.A."),
    Bank::new(36, "INBURSA", "Banco Inbursa, S.A."),
    Bank::new(37, "INTERACCIONES", "Banco Interacciones, S.A."),
    Bank::new(42, "MIFEL", "Banca Mifel, S.A."),
    Bank::new(44, "SCOTIABANK", "Scotiabank Inverlat, S.A."),
    Bank::new(58, "BANREGIO", "Banco Regional de Monterrey, S.A."),
    Bank::new(59, "INVEX", "Banco Invex, S.A."),
    Bank::new(60, "BANSI", "Bansi, S.A."),
    Bank::new(62, "AFIRME", "Banca Afirme, S.A."),
    Bank::new(72, "BANORTE", "Banco Mercantil del Norte, S.A."),
    Bank::new(102, "ABNAMRO", "ABN AMRO Bank México, S.A."),
    Bank::new(103, "AMERICAN EXPRESS", "American Express Bank (México), S.A."),
    Bank::new(106, "BAMSA", "Bank of America México, S.A."),
    Bank::new(108, "TOKYO", "Bank of Tokyo-Mitsubishi UFJ (México), S.A."),
    Bank::new(110, "JP MORGAN", "Banco J.P. Morgan, S.A."),
    Bank::new(112, "BMONEX", "Banco Monex, S.A."),
    Bank::new(113, "VE POR MAS", "Banco Ve por Mas, S.A."),
    Bank::new(116, "ING", "ING Bank (México), S.A."),
    Bank::new(124, "DEUTSCHE", "Deutsche Bank México, S.A."),
    Bank::new(126, "CREDIT SUISSE", "Banco Credit Suisse (México), S.A."),
    Bank::new(127, "AZTECA", "Banco Azteca, S.A."),
    Bank::new(128, "AUTOFIN", "Banco Autofin México, S.A."),
    Bank::new(129, "BARCLAYS", "Barclays Bank México, S.A."),
    Bank::new(130, "COMPARTAMOS", "Banco Compartamos, S.A."),
    Bank::new(131, "FAMSA", "Banco Ahorro Famsa, S.A."),
    Bank::new(132, "BMULTIVA", "Banco Multiva, S.A."),
    Bank::new(133, "PRUDENTIAL", "Prudencial Bank, S.A."),
    Bank::new(134, "WAL-MART", "Banco Wal Mart de México Adelante, S.A."),
    Bank::new(135, "NAFIN", "Nacional Financiera, S.N.C."),
    Bank::new(136, "REGIONAL", "Banco Regional, S.A."),
    Bank::new(137, "BANCOPPEL", "BanCoppel, S.A."),
    Bank::new(138, "ABC CAPITAL", "ABC Capital, S.A. I.B.M."),
    Bank::new(139, "UBS BANK", "UBS Banco, S.A."),
    Bank::new(140, "FÁCIL", "Banco Fácil, S.A."),
    Bank::new(141, "VOLKSWAGEN", "Volkswagen Bank S.A. Institución de Banca Múltiple"),
    Bank::new(143, "CIBanco", "Consultoría Internacional Banco, S.A."),
    Bank::new(145, "BBASE", "Banco BASE, S.A. de I.B.M."),
    Bank::new(147, "BANKAOOL", "Bankaool, S.A., Institución de Banca Múltiple"),
    Bank::new(148, "PagaTodo", "Banco PagaTodo S.A., Institución de Banca Múltiple"),
    Bank::new(150, "BIM", "Banco Inmobiliario Mexicano, S.A., Institución de Banca Múltiple"),
    Bank::new(156, "SABADELL", "Banco Sabadell, S.A. I.B.M."),
    Bank::new(166, "BANSEFI", "Banco del Ahorro Nacional y Servicios Financieros, S.N.C."),
    Bank::new(168, "HIPOTECARIA FEDERAL", "Sociedad Hipotecaria Federal, S.N.C."),
    Bank::new(600, "MONEXCB", "Monex Casa de Bolsa, S.A. de C.V."),
    Bank::new(601, "GBM", "GBM Grupo Bursátil Mexicano, S.A. de C.V."),
    Bank::new(602, "MASARI CC.", "Masari Casa de Cambio, S.A. de C.V."),
    Bank::new(604, "C.B. INBURSA", "Inversora Bursátil, S.A. de C.V."),
    Bank::new(605, "VALUÉ", "Valué, S.A. de C.V., Casa de Bolsa"),
    Bank::new(606, "CB BASE", "Base Internacional Casa de Bolsa, S.A. de C.V."),
    Bank::new(607, "TIBER", "Casa de Cambio Tiber, S.A. de C.V."),
    Bank::new(608, "VECTOR", "Vector Casa de Bolsa, S.A. de C.V."),
    Bank::new(610, "B&B", "B y B Casa de Cambio, S.A. de C.V."),
    Bank::new(611, "INTERCAM", "Intercam Casa de Cambio, S.A. de C.V."),
    Bank::new(613, "MULTIVA", "Multivalores Casa de Bolsa, S.A. de C.V. Multiva Gpo. Fin."),
    Bank::new(614, "ACCIVAL", "Acciones y Valores Banamex, S.A. de C.V., Casa de Bolsa"),
    Bank::new(615, "MERRILL LYNCH", "Merrill Lynch México, S.A. de C.V., Casa de Bolsa"),
    Bank::new(616, "FINAMEX", "Casa de Bolsa Finamex, S.A. de C.V."),
    Bank::new(617, "VALMEX", "Valores Mexicanos Casa de Bolsa, S.A. de C.V."),
    Bank::new(618, "ÚNICA", "Única Casa de Cambio, S.A. de C.V."),
    Bank::new(619, "ASEGURADORA MAPFRE", "MAPFRE Tepeyac S.A."),
    Bank::new(620, "AFORE PROFUTURO", "Profuturo G.N.P., S.A. de C.V."),
    Bank::new(621, "CB ACTINBER", "Actinver Casa de Bolsa, S.A. de C.V."),
    Bank::new(622, "ACTINVE SI", "Actinver S.A. de C.V."),
    Bank::new(623, "SKANDIA", "Skandia Vida S.A. de C.V."),
    Bank::new(624, "CONSULTORÍA", "Consultoría Internacional Casa de Cambio, S.A. de C.V."),
    Bank::new(626, "CBDEUTSCHE", "Deutsche Securities, S.A. de C.V."),
    Bank::new(627, "ZURICH", "Zurich Compañía de Seguros, S.A."),
    Bank::new(628, "ZURICHVI", "Zurich Vida, Compañía de Seguros, S.A."),
    Bank::new(629, "HIPOTECARIA SU CASITA", "Hipotecaria su Casita, S.A. de C.V."),
    Bank::new(630, "C.B. INTERCAM", "Intercam Casa de Bolsa, S.A. de C.V."),
    Bank::new(631, "C.B. VANGUARDIA", "Vanguardia Casa de Bolsa, S.A. de C.V."),
    Bank::new(632, "BULLTICK C.B.", "Bulltick Casa de Bolsa, S.A. de C.V."),
    Bank::new(633, "STERLING", "Sterling Casa de Cambio, S.A. de C.V."),
    Bank::new(634, "FINCOMUN", "Fincomún, Servicios Financieros Comunitarios, S.A. de C.V."),
    Bank::new(636, "HDI SEGUROS", "HDI Seguros, S.A. de C.V."),
    Bank::new(637, "ORDER", "OrderExpress Casa de Cambio , S.A. de C.V. AAC"),
    Bank::new(638, "AKALA", "Akala, S.A. de C.V., Sociedad Financiera Popular"),
    Bank::new(640, "JP MORGAN C.B.", "J.P. Morgan Casa de Bolsa, S.A. de C.V."),
    Bank::new(642, "REFORMA", "Operadora de Recursos Reforma, S.A. de C.V."),
    Bank::new(646, "STP", "Sistema de Transferencias y Pagos STP, S.A. de C.V., SOFOM E.N.R."),
    Bank::new(647, "TELECOMM", "Telecomunicaciones de México"),
    Bank::new(648, "EVERCORE", "Evercore Casa de Bolsa, S.A. de C.V."),
    Bank::new(649, "SKANDIA", "Skandia Operadora S.A. de C.V."),
    Bank::new(651, "SEGMTY", "Seguros Monterrey New York Life, S.A de C.V."),
    Bank::new(652, "ASEA", "Solución Asea, S.A. de C.V., Sociedad Financiera Popular"),
    Bank::new(653, "KUSPIT", "Kuspit Casa de Bolsa, S.A. de C.V."),
    Bank::new(655, "SOFIEXPRESS", "J.P. SOFIEXPRESS, S.A. de C.V., S.F.P."),
    Bank::new(656, "UNAGRA", "UNAGRA, S.A. de C.V., S.F.P."),
    Bank::new(
        659,
        "OPCIONES EMPRESARIALES DEL NOROESTE",
        "Opciones Empresariales Del Noreste, S.A. DE C.V.",
    ),
    Bank::new(670, "LIBERTAD", "Libertad Servicios Financieros, S.A. De C.V."),
    Bank::new(901, "CLS", "CLS Bank International"),
    Bank::new(902, "INDEVAL", "SD. INDEVAL, S.A. de C.V."),
    Bank::new(999, "N/A", "N/A"),
];
