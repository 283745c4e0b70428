//! City (plaza) registry: three-digit branch location codes.
//!
//! Digits 4–6 of a CLABE identify the city of the branch that opened the
//! account. Several cities can share a code, so the raw table is a list of
//! `(code, name)` rows where a code may repeat. Lookups go through a
//! [`CityIndex`] that joins all names of a code, in table order, into one
//! display string.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Serialize;

/// Marker appended to rows that repeat a city already listed under another code.
const ALTERNATE_MARKER: &str = "[alternate]";

/// One row of the city table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct City {
    /// Plaza code (1–999), as encoded in CLABE digits 4–6.
    pub code: u16,
    /// City name as published.
    pub name: &'static str,
}

impl City {
    const fn new(code: u16, name: &'static str) -> Self {
        Self { code, name }
    }

    /// Whether this row is an alternate listing of a city whose primary
    /// code is elsewhere in the table.
    pub fn is_alternate(&self) -> bool {
        self.name.ends_with(ALTERNATE_MARKER)
    }
}

/// Code → joined city names.
///
/// Built from an ordered city table: each name is appended to the entry for
/// its code, separated by `", "`, so the result only depends on row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityIndex {
    names: BTreeMap<u16, String>,
}

impl CityIndex {
    /// Build the index from table rows.
    pub fn build(rows: &[City]) -> Self {
        let mut names: BTreeMap<u16, String> = BTreeMap::new();
        for row in rows {
            names
                .entry(row.code)
                .and_modify(|joined| {
                    joined.push_str(", ");
                    joined.push_str(row.name);
                })
                .or_insert_with(|| row.name.to_string());
        }
        Self { names }
    }

    /// Joined names for `code`, or `None` if the code has no rows.
    pub fn get(&self, code: u16) -> Option<&str> {
        self.names.get(&code).map(String::as_str)
    }

    /// Number of distinct codes.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the index has no codes.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate `(code, joined names)` in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &str)> {
        self.names.iter().map(|(code, name)| (*code, name.as_str()))
    }
}

/// Process-wide index over [`CITIES`].
///
/// Built on first access and never rebuilt; `LazyLock` guarantees that
/// concurrent first callers block until a single build has finished.
static CITY_INDEX: LazyLock<CityIndex> = LazyLock::new(|| {
    let index = CityIndex::build(CITIES);
    tracing::debug!(rows = CITIES.len(), codes = index.len(), "built city index");
    index
});

/// The shared city index, building it if this is the first use.
pub fn city_index() -> &'static CityIndex {
    &CITY_INDEX
}

/// Look up the display name(s) for a city code.
///
/// Codes with several rows yield all names comma-separated in table order.
/// Returns `None` when the code is not registered.
pub fn lookup_city(code: u16) -> Option<&'static str> {
    CITY_INDEX.get(code)
}

/// The raw city table, in published order (duplicates included).
pub fn cities() -> &'static [City] {
    CITIES
}

/// Published plaza codes (466 rows, 407 distinct codes).
/// Ordered by code; rows sharing a code keep their published order.
static CITIES: &[City] = &[
    City::new(10, "Aguascalientes"),
    City::new(12, "Calvillo"),
    City::new(14, "Jesús María"),
    City::new(20, "Mexicali"),
    City::new(22, "Ensenada"),
    City::new(27, "Tecate"),
    City::new(27, "Tijuana"),
    City::new(28, "La Mesa"),
    City::new(28, "Rosarito"),
    City::new(28, "Tijuana [alternate]"),
    City::new(40, "La Paz"),
    City::new(41, "Cabo San Lucas"),
    City::new(42, "Ciudad Constitución"),
    City::new(43, "Guerrero Negro"),
    City::new(45, "San José del Cabo"),
    City::new(46, "Santa Rosalía"),
    City::new(50, "Campeche"),
    City::new(51, "Calkiní"),
    City::new(52, "Ciudad del Carmen"),
    City::new(53, "Champotón"),
    City::new(60, "Gómez Palacio"),
    City::new(60, "Torreón"),
    City::new(62, "Ciudad Acuña"),
    City::new(68, "Monclova"),
    City::new(71, "Nava"),
    City::new(72, "Nueva Rosita"),
    City::new(74, "Parras de la Fuente"),
    City::new(75, "Piedras Negras"),
    City::new(76, "Ramos Arizpe"),
    City::new(77, "Sabinas"),
    City::new(78, "Saltillo"),
    City::new(80, "San Pedro de las Colonias"),
    City::new(90, "Colima"),
    City::new(95, "Manzanillo"),
    City::new(97, "Tecomán"),
    City::new(100, "Terán"),
    City::new(100, "Tuxtla Gutiérrez"),
    City::new(103, "Arriaga"),
    City::new(107, "Cintalapa"),
    City::new(109, "Comitán"),
    City::new(109, "Villa Las Rosas"),
    City::new(111, "Chiapa de Corso"),
    City::new(113, "F. Comalapa"),
    City::new(114, "Huixtla"),
    City::new(123, "Ocosingo"),
    City::new(124, "Ocozocuautla"),
    City::new(125, "Palenque"),
    City::new(126, "Pichucalco"),
    City::new(127, "Pijijiapan"),
    City::new(128, "Reforma"),
    City::new(130, "San Cristóbal de las Casas"),
    City::new(131, "Simojovel"),
    City::new(133, "Tapachula"),
    City::new(135, "Tonala"),
    City::new(137, "Venustiano Carranza"),
    City::new(138, "Villa Flores"),
    City::new(140, "Yajalón"),
    City::new(150, "Chihuahua"),
    City::new(150, "Ciudad Delicias"),
    City::new(152, "Ciudad Anáhuac"),
    City::new(155, "Ciudad Camargo"),
    City::new(158, "Ciudad Cuauhtémoc"),
    City::new(161, "Ciudad Guerrero"),
    City::new(162, "Parral"),
    City::new(163, "Ciudad Jiménez"),
    City::new(164, "Ciudad Juárez"),
    City::new(165, "Ciudad Madera"),
    City::new(167, "El Molino de Namiquipa"),
    City::new(168, "Nuevo Casas Grandes"),
    City::new(180, "Atizapan"),
    City::new(180, "Chalco"),
    City::new(180, "Ciudad de México"),
    City::new(180, "Coacalco"),
    City::new(180, "Cuautitlán Izcalli"),
    City::new(180, "Cuautitlán"),
    City::new(180, "Ecatepec"),
    City::new(180, "Huehuetoca"),
    City::new(180, "Huixquilucan"),
    City::new(180, "Ixtapaluca"),
    City::new(180, "Los Reyes La Paz"),
    City::new(180, "Naucalpan"),
    City::new(180, "Nezahualcóyotl"),
    City::new(180, "Tecamac"),
    City::new(180, "Teotihuacán"),
    City::new(180, "Texcoco"),
    City::new(180, "Tlalnepantla"),
    City::new(190, "Durango"),
    City::new(198, "N/A"),
    City::new(201, "Tepehuanes"),
    City::new(202, "Vicente Guerrero"),
    City::new(210, "Guanajuato"),
    City::new(211, "Abasolo"),
    City::new(212, "Acámbaro"),
    City::new(213, "Apaseo el Alto"),
    City::new(214, "Apaseo el Grande"),
    City::new(215, "Celaya"),
    City::new(216, "Comonfort"),
    City::new(217, "Coroneo"),
    City::new(218, "Cortazar"),
    City::new(219, "Cuerámaro"),
    City::new(220, "Dolores Hidalgo"),
    City::new(222, "Irapuato"),
    City::new(223, "Jaral del Progreso"),
    City::new(224, "Jerécuaro"),
    City::new(225, "León"),
    City::new(226, "Cd. Manuel Doblado"),
    City::new(227, "Moroleón"),
    City::new(229, "Pénjamo"),
    City::new(232, "Romita"),
    City::new(233, "Salamanca"),
    City::new(234, "Salvatierra"),
    City::new(236, "San Felipe"),
    City::new(237, "Purísima de Bustos"),
    City::new(237, "San Francisco del Rincoón"),
    City::new(238, "San José Iturbide"),
    City::new(239, "San Luis de la Paz"),
    City::new(240, "San Miguel Allende"),
    City::new(244, "Silao"),
    City::new(247, "Uriangato"),
    City::new(248, "Valle de Santiago"),
    City::new(249, "Yuriria"),
    City::new(260, "Chilpancingo"),
    City::new(261, "Acapulco"),
    City::new(263, "Arcelia"),
    City::new(264, "Atoyac de Álvarez"),
    City::new(266, "Ciudad Altamirano"),
    City::new(267, "Coyuca de Benítez"),
    City::new(270, "Chilapa"),
    City::new(271, "Huitzuco"),
    City::new(272, "Iguala"),
    City::new(272, "La Sabana"),
    City::new(274, "Cuajinicuilapa"),
    City::new(274, "Ometepec"),
    City::new(275, "San Marcos"),
    City::new(276, "Taxco"),
    City::new(278, "Teloloapan"),
    City::new(281, "Tlapa"),
    City::new(282, "Ixtapa Zihuatanejo"),
    City::new(282, "Zihuatanejo"),
    City::new(290, "Pachuca"),
    City::new(291, "Actopan"),
    City::new(292, "Apam"),
    City::new(293, "Atotonilco el Grande"),
    City::new(294, "Ciudad Sahagún"),
    City::new(294, "Teocaltiche"),
    City::new(295, "Cuautepec"),
    City::new(296, "Huejutla"),
    City::new(297, "Huichapan"),
    City::new(298, "Ixmiquilpan"),
    City::new(303, "Progreso de Obregón"),
    City::new(305, "Tepeapulco"),
    City::new(308, "Tizayuca"),
    City::new(311, "Tula de Allende"),
    City::new(312, "Tulancingo"),
    City::new(313, "Zacualtipán"),
    City::new(314, "Zimapán"),
    City::new(320, "El Salto"),
    City::new(320, "Guadalajara"),
    City::new(320, "San Pedro Tlaquepaque"),
    City::new(320, "Tlajomulco"),
    City::new(320, "Tonala [alternate]"),
    City::new(320, "Zapopan"),
    City::new(326, "Ameca"),
    City::new(327, "Arandas"),
    City::new(330, "Atotonilco el Alto"),
    City::new(331, "Atequiza"),
    City::new(333, "Autlán"),
    City::new(334, "Azteca"),
    City::new(340, "Casimiro Castillo"),
    City::new(341, "Cihuatlán"),
    City::new(342, "Ciudad Guzmán"),
    City::new(346, "Chapala"),
    City::new(348, "El Grullo"),
    City::new(355, "Ixtlahuacán del Río"),
    City::new(356, "Jalostotitlán"),
    City::new(357, "Jamay"),
    City::new(361, "La Barca"),
    City::new(362, "Lagos de Moreno"),
    City::new(370, "Ocotlán"),
    City::new(373, "Pihuamo"),
    City::new(375, "Las Juntas"),
    City::new(375, "Nuevo Vallarta"),
    City::new(375, "Pitillal"),
    City::new(375, "Puerto Vallarta"),
    City::new(381, "San Juan de los Lagos"),
    City::new(382, "N/A"),
    City::new(384, "San Miguel el Alto"),
    City::new(385, "San Patricio Melaque"),
    City::new(386, "Sayula"),
    City::new(387, "Tala"),
    City::new(389, "Tamazula de Gordiano"),
    City::new(391, "Tecalitlán"),
    City::new(396, "Tepatitlán"),
    City::new(397, "Tequila"),
    City::new(403, "Tototlán"),
    City::new(404, "Túxpam"),
    City::new(411, "Villa Hidalgo"),
    City::new(413, "Zacoalco de Torres"),
    City::new(414, "Zapotiltic"),
    City::new(416, "Zapotlanejo"),
    City::new(420, "Toluca"),
    City::new(421, "Acambay"),
    City::new(422, "Almoloya de Juárez"),
    City::new(424, "Amecameca"),
    City::new(425, "Apaxco"),
    City::new(426, "Atlacomulco"),
    City::new(428, "Coatepec de Harinas"),
    City::new(430, "Chicoloapan"),
    City::new(431, "Chiconcuac"),
    City::new(432, "El Oro"),
    City::new(433, "Ixtapan de la Sal"),
    City::new(434, "Ixtlahuaca"),
    City::new(435, "Jilotepec"),
    City::new(438, "Lerma"),
    City::new(441, "Metepec"),
    City::new(443, "Otumba"),
    City::new(445, "San Mateo Atenco"),
    City::new(446, "Tejupilco"),
    City::new(448, "Temascaltepec"),
    City::new(449, "Temoaya"),
    City::new(450, "Tenancingo"),
    City::new(451, "Tenago del Valle"),
    City::new(453, "Santiago Tiangistenco"),
    City::new(455, "Tultepec"),
    City::new(456, "Tultitlán"),
    City::new(457, "Valle de Bravo"),
    City::new(460, "Villa Nicolás Romero"),
    City::new(463, "Zumpango"),
    City::new(470, "Morelia"),
    City::new(472, "Aguililla"),
    City::new(476, "Apatzingán"),
    City::new(480, "Ciudad Hidalgo"),
    City::new(483, "Cotija"),
    City::new(484, "Cuitzeo"),
    City::new(492, "Huetamo"),
    City::new(493, "Jacona"),
    City::new(494, "Jiquilpan"),
    City::new(496, "La Piedad"),
    City::new(497, "Lázaro Cárdenas"),
    City::new(498, "Los Reyes"),
    City::new(499, "Maravatío"),
    City::new(501, "Nueva Italia"),
    City::new(506, "Pátzcuaro"),
    City::new(508, "Purépero"),
    City::new(509, "Puruandiro"),
    City::new(512, "Sahuayo"),
    City::new(515, "Tacámbaro"),
    City::new(517, "Tangancícuaro"),
    City::new(519, "Tepalcatepec"),
    City::new(523, "Tlazazalca"),
    City::new(528, "Uruapan"),
    City::new(533, "Yurécuaro"),
    City::new(534, "Zacapu"),
    City::new(535, "Zamora"),
    City::new(536, "Zinapécuaro"),
    City::new(537, "Zitácuaro"),
    City::new(540, "Cuernavaca"),
    City::new(542, "Cuautla"),
    City::new(542, "Oaxtepec, Morelos"),
    City::new(543, "Jiutepec"),
    City::new(544, "Jojutla"),
    City::new(545, "Puente de Ixtla"),
    City::new(546, "Temixco"),
    City::new(548, "Tetecala"),
    City::new(549, "Yautepec"),
    City::new(552, "Zacatepec"),
    City::new(560, "Tepic"),
    City::new(561, "Acaponeta"),
    City::new(562, "Ahuacatlán"),
    City::new(564, "Compostela"),
    City::new(566, "Ixtlán del Río"),
    City::new(571, "San Blas"),
    City::new(573, "Santiago Ixcuintla"),
    City::new(575, "Túxpam [alternate]"),
    City::new(580, "Apodaca"),
    City::new(580, "Cadereyta"),
    City::new(580, "Cd. Guadalupe"),
    City::new(580, "General Escobedo"),
    City::new(580, "Monterrey"),
    City::new(580, "San Nicolás de los Garza"),
    City::new(580, "San Pedro Garza García"),
    City::new(580, "Santa Catarina"),
    City::new(583, "Allende"),
    City::new(592, "General Zuazua"),
    City::new(595, "Linares"),
    City::new(597, "Montemorelos"),
    City::new(599, "Sabinas Hidalgo"),
    City::new(600, "Salinas Victoria"),
    City::new(601, "El Cercado"),
    City::new(601, "Villa de Santiago"),
    City::new(610, "Oaxaca"),
    City::new(613, "Tlaxiaco"),
    City::new(614, "Huajuapan de León"),
    City::new(616, "Ixtepec"),
    City::new(617, "Juchitán"),
    City::new(619, "Loma Bonita"),
    City::new(620, "Matías Romero"),
    City::new(621, "Miahuatlán"),
    City::new(622, "Ocotlán [alternate]"),
    City::new(624, "Puerto Escondido"),
    City::new(626, "Salina Cruz"),
    City::new(627, "Lagunas"),
    City::new(628, "Tuxtepec"),
    City::new(630, "Pochutla"),
    City::new(631, "San Pedro Tapanatepec"),
    City::new(632, "Santa Lucía del Camino"),
    City::new(634, "Bahías de Huatulco"),
    City::new(635, "Santiago Juxtlahuaca"),
    City::new(636, "Pinotepa Nacional"),
    City::new(637, "Tehuantepec"),
    City::new(638, "Tlacolula"),
    City::new(640, "Zimatlán"),
    City::new(650, "Cholula"),
    City::new(650, "La Resurrección"),
    City::new(650, "Puebla"),
    City::new(650, "San Baltazar Campeche"),
    City::new(651, "N/A"),
    City::new(652, "Acatzingo"),
    City::new(654, "Atlixco"),
    City::new(656, "Cuetzalan"),
    City::new(659, "Huauchinango"),
    City::new(662, "Izúcar de Matamoros"),
    City::new(667, "San Martín Texmelucan"),
    City::new(668, "San Felipe Hueyotlipan"),
    City::new(669, "Tecamachalco"),
    City::new(670, "Tehuacán"),
    City::new(671, "San Lorenzo"),
    City::new(672, "Teziutlán"),
    City::new(674, "Xicotepec de Juárez"),
    City::new(676, "Zacatlán"),
    City::new(680, "Pedro Escobedo"),
    City::new(680, "Querétaro"),
    City::new(680, "Villa Corregidora"),
    City::new(681, "Amealco"),
    City::new(685, "San Juan del Río"),
    City::new(686, "Tequisquiapan"),
    City::new(690, "Chetumal"),
    City::new(691, "Cancún"),
    City::new(691, "Col. Puerto Juárez"),
    City::new(692, "Cozumel"),
    City::new(693, "N/A"),
    City::new(694, "Playa del Carmen"),
    City::new(700, "San Luis Potosí"),
    City::new(703, "Cerritos"),
    City::new(705, "Ciudad Valles"),
    City::new(709, "Matehuala"),
    City::new(711, "Río Verde"),
    City::new(716, "Tamuín"),
    City::new(730, "Culiacán"),
    City::new(735, "Concordia"),
    City::new(736, "Cosala"),
    City::new(737, "Choix"),
    City::new(738, "El Fuerte"),
    City::new(739, "Escuinapa"),
    City::new(740, "Guamúchil"),
    City::new(741, "Guasave"),
    City::new(743, "Los Mochis"),
    City::new(743, "Topolobampo"),
    City::new(744, "Mazatlán"),
    City::new(745, "Mocorito"),
    City::new(746, "Navolato"),
    City::new(760, "Hermosillo"),
    City::new(761, "Agua Prieta"),
    City::new(765, "Caborca"),
    City::new(766, "Cananea"),
    City::new(767, "Ciudad Obregón"),
    City::new(767, "Esperanza"),
    City::new(769, "Empalme"),
    City::new(770, "Guaymas"),
    City::new(770, "San Carlos"),
    City::new(771, "Huatabampo"),
    City::new(773, "Magdalena"),
    City::new(776, "Nacozari de García"),
    City::new(777, "Navojoa"),
    City::new(778, "Nogales"),
    City::new(779, "Puerto Peñasco"),
    City::new(780, "San Luis Río Colorado"),
    City::new(790, "Tamulte"),
    City::new(790, "Villa Hermosa"),
    City::new(792, "Cárdenas"),
    City::new(793, "Ciudad Pemex"),
    City::new(794, "Comalcalco"),
    City::new(796, "Emiliano Zapata"),
    City::new(797, "Frontera"),
    City::new(798, "Huimanguillo"),
    City::new(800, "Jalpa de Méndez"),
    City::new(802, "Macuspana"),
    City::new(803, "Nacajuca"),
    City::new(804, "Paraíso"),
    City::new(805, "Tacotalpa"),
    City::new(806, "Teapa"),
    City::new(807, "Tenosique"),
    City::new(810, "Ciudad Victoria"),
    City::new(811, "Altamira"),
    City::new(813, "Ciudad Madero"),
    City::new(813, "Tampico"),
    City::new(814, "Ciudad Mante"),
    City::new(818, "Matamoros"),
    City::new(821, "Colombia"),
    City::new(821, "Nuevo Laredo"),
    City::new(822, "Reynosa"),
    City::new(823, "Río Bravo"),
    City::new(825, "Soto La Marina"),
    City::new(826, "Valle Hermoso"),
    City::new(830, "Tlaxcala"),
    City::new(832, "Apizaco"),
    City::new(834, "Santa Ana Chiautempan"),
    City::new(840, "Jalapa"),
    City::new(841, "Acayucan"),
    City::new(843, "Agua Dulce"),
    City::new(845, "Álamo"),
    City::new(846, "Altotonga"),
    City::new(848, "Banderilla"),
    City::new(849, "Boca del Río"),
    City::new(852, "Ciudad Mendoza"),
    City::new(853, "Coatepec"),
    City::new(854, "Coatzacoalcos"),
    City::new(855, "Córdoba"),
    City::new(856, "Cosamaloapan"),
    City::new(860, "Cuitláhuac"),
    City::new(863, "Fortín de las Flores"),
    City::new(864, "Gutiérrez Zamora"),
    City::new(865, "Huatusco"),
    City::new(867, "Isla"),
    City::new(868, "Ixtaczoquitlán"),
    City::new(869, "Jáltipan"),
    City::new(871, "Juan Rodríguez Clara"),
    City::new(872, "Villa José Cardel"),
    City::new(873, "Las Choapas"),
    City::new(875, "Naranjos"),
    City::new(876, "Martínez de la Torre"),
    City::new(877, "Minatitlán"),
    City::new(878, "Misantla"),
    City::new(879, "Nanchital"),
    City::new(882, "Orizaba"),
    City::new(885, "Papantla"),
    City::new(886, "Perote"),
    City::new(888, "Poza Rica"),
    City::new(889, "Río Blanco"),
    City::new(890, "San Andrés Tuxtla"),
    City::new(891, "San Rafael"),
    City::new(894, "Platón Sánchez"),
    City::new(894, "Tantoyuca"),
    City::new(895, "Tempoal"),
    City::new(898, "Tierra Blanca"),
    City::new(901, "Tlapacoyan"),
    City::new(903, "Túxpam de Rodríguez Cano"),
    City::new(905, "Cd. Industrial Framboyan"),
    City::new(905, "Veracruz"),
    City::new(910, "Mérida"),
    City::new(913, "Motul"),
    City::new(914, "Oxkutzcab"),
    City::new(915, "Progreso"),
    City::new(917, "Ticul"),
    City::new(918, "Tizimín"),
    City::new(920, "Valladolid"),
    City::new(930, "Zacatecas"),
    City::new(933, "Fresnillo"),
    City::new(934, "Guadalupe"),
    City::new(935, "Jalpa"),
    City::new(936, "Jerez de G. Salinas"),
    City::new(938, "Juchipila"),
    City::new(939, "Loreto"),
    City::new(946, "Nochistlán"),
    City::new(958, "Valparaíso"),
    City::new(960, "Calera de V. Rosales"),
];
