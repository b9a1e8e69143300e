//! Localized names for the panchang elements.
//!
//! Every table is `static` data in four languages: English, Hindi, Marathi,
//! and Gujarati. Lookups take the element's index and return `None` when the
//! index is out of range.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::karana::Karana;
use crate::tithi::Paksha;

/// Display language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Mr,
    Gu,
}

impl Language {
    pub const ALL: [Language; 4] = [Self::En, Self::Hi, Self::Mr, Self::Gu];

    /// ISO 639-1 code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Mr => "mr",
            Self::Gu => "gu",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "hi" | "hindi" => Ok(Self::Hi),
            "mr" | "marathi" => Ok(Self::Mr),
            "gu" | "gujarati" => Ok(Self::Gu),
            other => Err(format!("unsupported language '{other}'")),
        }
    }
}

/// One name in every supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MultilingualText {
    pub en: &'static str,
    pub hi: &'static str,
    pub mr: &'static str,
    pub gu: &'static str,
}

impl MultilingualText {
    pub const fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.en,
            Language::Hi => self.hi,
            Language::Mr => self.mr,
            Language::Gu => self.gu,
        }
    }
}

const fn t(
    en: &'static str,
    hi: &'static str,
    mr: &'static str,
    gu: &'static str,
) -> MultilingualText {
    MultilingualText { en, hi, mr, gu }
}

/// Shukla paksha tithis 1..=15, ending at Purnima.
pub static SHUKLA_TITHI_NAMES: [MultilingualText; 15] = [
    t("Pratipada", "प्रतिपदा", "प्रतिपदा", "પ્રતિપદા"),
    t("Dwitiya", "द्वितीया", "द्वितीया", "દ્વિતીયા"),
    t("Tritiya", "तृतीया", "तृतीया", "તૃતીયા"),
    t("Chaturthi", "चतुर्थी", "चतुर्थी", "ચતુર્થી"),
    t("Panchami", "पंचमी", "पंचमी", "પંચમી"),
    t("Shashthi", "षष्ठी", "षष्ठी", "ષષ્ઠી"),
    t("Saptami", "सप्तमी", "सप्तमी", "સપ્તમી"),
    t("Ashtami", "अष्टमी", "अष्टमी", "અષ્ટમી"),
    t("Navami", "नवमी", "नवमी", "નવમી"),
    t("Dashami", "दशमी", "दशमी", "દશમી"),
    t("Ekadashi", "एकादशी", "एकादशी", "એકાદશી"),
    t("Dwadashi", "द्वादशी", "द्वादशी", "દ્વાદશી"),
    t("Trayodashi", "त्रयोदशी", "त्रयोदशी", "ત્રયોદશી"),
    t("Chaturdashi", "चतुर्दशी", "चतुर्दशी", "ચતુર્દશી"),
    t("Purnima", "पूर्णिमा", "पौर्णिमा", "પૂર્ણિમા"),
];

/// Krishna paksha tithis 16..=30, ending at Amavasya.
pub static KRISHNA_TITHI_NAMES: [MultilingualText; 15] = [
    t("Pratipada", "प्रतिपदा", "प्रतिपदा", "પ્રતિપદા"),
    t("Dwitiya", "द्वितीया", "द्वितीया", "દ્વિતીયા"),
    t("Tritiya", "तृतीया", "तृतीया", "તૃતીયા"),
    t("Chaturthi", "चतुर्थी", "चतुर्थी", "ચતુર્થી"),
    t("Panchami", "पंचमी", "पंचमी", "પંચમી"),
    t("Shashthi", "षष्ठी", "षष्ठी", "ષષ્ઠી"),
    t("Saptami", "सप्तमी", "सप्तमी", "સપ્તમી"),
    t("Ashtami", "अष्टमी", "अष्टमी", "અષ્ટમી"),
    t("Navami", "नवमी", "नवमी", "નવમી"),
    t("Dashami", "दशमी", "दशमी", "દશમી"),
    t("Ekadashi", "एकादशी", "एकादशी", "એકાદશી"),
    t("Dwadashi", "द्वादशी", "द्वादशी", "દ્વાદશી"),
    t("Trayodashi", "त्रयोदशी", "त्रयोदशी", "ત્રયોદશી"),
    t("Chaturdashi", "चतुर्दशी", "चतुर्दशी", "ચતુર્દશી"),
    t("Amavasya", "अमावस्या", "अमावस्या", "અમાવસ્યા"),
];

pub static NAKSHATRA_NAMES: [MultilingualText; 27] = [
    t("Ashwini", "अश्विनी", "अश्विनी", "અશ્વિની"),
    t("Bharani", "भरणी", "भरणी", "ભરણી"),
    t("Krittika", "कृत्तिका", "कृत्तिका", "કૃત્તિકા"),
    t("Rohini", "रोहिणी", "रोहिणी", "રોહિણી"),
    t("Mrigashira", "मृगशिरा", "मृगशिरा", "મૃગશિરા"),
    t("Ardra", "आर्द्रा", "आर्द्रा", "આર્દ્રા"),
    t("Punarvasu", "पुनर्वसु", "पुनर्वसु", "પુનર્વસુ"),
    t("Pushya", "पुष्य", "पुष्य", "પુષ્ય"),
    t("Ashlesha", "अश्लेषा", "अश्लेषा", "અશ્લેષા"),
    t("Magha", "मघा", "मघा", "મઘા"),
    t("Purva Phalguni", "पूर्व फाल्गुनी", "पूर्व फाल्गुनी", "પૂર્વ ફાલ્ગુની"),
    t("Uttara Phalguni", "उत्तर फाल्गुनी", "उत्तर फाल्गुनी", "ઉત્તર ફાલ્ગુની"),
    t("Hasta", "हस्त", "हस्त", "હસ્ત"),
    t("Chitra", "चित्रा", "चित्रा", "ચિત્રા"),
    t("Swati", "स्वाति", "स्वाति", "સ્વાતિ"),
    t("Vishakha", "विशाखा", "विशाखा", "વિશાખા"),
    t("Anuradha", "अनुराधा", "अनुराधा", "અનુરાધા"),
    t("Jyeshtha", "ज्येष्ठा", "ज्येष्ठा", "જ્યેષ્ઠા"),
    t("Mula", "मूल", "मूल", "મૂળ"),
    t("Purva Ashadha", "पूर्वाषाढ़ा", "पूर्वाषाढा", "પૂર્વાષાઢા"),
    t("Uttara Ashadha", "उत्तराषाढ़ा", "उत्तराषाढा", "ઉત્તરાષાઢા"),
    t("Shravana", "श्रवण", "श्रवण", "શ્રવણ"),
    t("Dhanishta", "धनिष्ठा", "धनिष्ठा", "ધનિષ્ઠા"),
    t("Shatabhisha", "शतभिषा", "शतभिषा", "શતભિષા"),
    t("Purva Bhadrapada", "पूर्वभाद्रपदा", "पूर्वभाद्रपदा", "પૂર્વભાદ્રપદા"),
    t("Uttara Bhadrapada", "उत्तरभाद्रपदा", "उत्तरभाद्रपदा", "ઉત્તરભાદ્રપદા"),
    t("Revati", "रेवती", "रेवती", "રેવતી"),
];

pub static YOGA_NAMES: [MultilingualText; 27] = [
    t("Vishkambha", "विष्कम्भ", "विष्कंभ", "વિષ્કંભ"),
    t("Priti", "प्रीति", "प्रीति", "પ્રીતિ"),
    t("Ayushman", "आयुष्मान", "आयुष्मान", "આયુષ્માન"),
    t("Saubhagya", "सौभाग्य", "सौभाग्य", "સૌભાગ્ય"),
    t("Shobhana", "शोभन", "शोभन", "શોભન"),
    t("Atiganda", "अतिगण्ड", "अतिगंड", "અતિગંડ"),
    t("Sukarma", "सुकर्मा", "सुकर्मा", "સુકર્મા"),
    t("Dhriti", "धृति", "धृति", "ધૃતિ"),
    t("Shula", "शूल", "शूल", "શૂળ"),
    t("Ganda", "गण्ड", "गंड", "ગંડ"),
    t("Vriddhi", "वृद्धि", "वृद्धी", "વૃદ્ધિ"),
    t("Dhruva", "ध्रुव", "ध्रुव", "ધ્રુવ"),
    t("Vyaghata", "व्याघात", "व्याघात", "વ્યાઘાત"),
    t("Harshana", "हर्षण", "हर्षण", "હર્ષણ"),
    t("Vajra", "वज्र", "वज्र", "વજ્ર"),
    t("Siddhi", "सिद्धि", "सिद्धी", "સિદ્ધિ"),
    t("Vyatipata", "व्यतीपात", "व्यतीपात", "વ્યતીપાત"),
    t("Variyan", "वरीयान", "वरीयान", "વરીયાન"),
    t("Parigha", "परिघ", "परिघ", "પરિઘ"),
    t("Shiva", "शिव", "शिव", "શિવ"),
    t("Siddha", "सिद्ध", "सिद्ध", "સિદ્ધ"),
    t("Sadhya", "साध्य", "साध्य", "સાધ્ય"),
    t("Shubha", "शुभ", "शुभ", "શુભ"),
    t("Shukla", "शुक्ल", "शुक्ल", "શુક્લ"),
    t("Brahma", "ब्रह्म", "ब्रह्म", "બ્રહ્મ"),
    t("Indra", "इन्द्र", "इंद्र", "ઇન્દ્ર"),
    t("Vaidhriti", "वैधृति", "वैधृती", "વૈધૃતિ"),
];

/// Karana names in [`crate::karana::ALL_KARANAS`] order.
pub static KARANA_NAMES: [MultilingualText; 11] = [
    t("Kimstughna", "किंस्तुघ्न", "किंस्तुघ्न", "કિંસ્તુઘ્ન"),
    t("Bava", "बव", "बव", "બવ"),
    t("Balava", "बालव", "बालव", "બાલવ"),
    t("Kaulava", "कौलव", "कौलव", "કૌલવ"),
    t("Taitila", "तैतिल", "तैतिल", "તૈતિલ"),
    t("Gara", "गर", "गर", "ગર"),
    t("Vanija", "वणिज", "वणिज", "વણિજ"),
    t("Vishti", "विष्टि", "विष्टी", "વિષ્ટિ"),
    t("Shakuni", "शकुनि", "शकुनी", "શકુનિ"),
    t("Chatushpada", "चतुष्पाद", "चतुष्पाद", "ચતુષ્પાદ"),
    t("Naga", "नाग", "नाग", "નાગ"),
];

/// Weekday names, Sunday first.
pub static VAAR_NAMES: [MultilingualText; 7] = [
    t("Sunday", "रविवार", "रविवार", "રવિવાર"),
    t("Monday", "सोमवार", "सोमवार", "સોમવાર"),
    t("Tuesday", "मंगलवार", "मंगळवार", "મંગળવાર"),
    t("Wednesday", "बुधवार", "बुधवार", "બુધવાર"),
    t("Thursday", "गुरुवार", "गुरुवार", "ગુરુવાર"),
    t("Friday", "शुक्रवार", "शुक्रवार", "શુક્રવાર"),
    t("Saturday", "शनिवार", "शनिवार", "શનિવાર"),
];

pub static PAKSHA_NAMES: [MultilingualText; 2] = [
    t("Shukla Paksha", "शुक्ल पक्ष", "शुक्ल पक्ष", "શુક્લ પક્ષ"),
    t("Krishna Paksha", "कृष्ण पक्ष", "कृष्ण पक्ष", "કૃષ્ણ પક્ષ"),
];

/// Name of a 1-based tithi index (1..=30).
pub fn tithi_name(tithi_index: u8) -> Option<&'static MultilingualText> {
    match tithi_index {
        1..=15 => SHUKLA_TITHI_NAMES.get(usize::from(tithi_index - 1)),
        16..=30 => KRISHNA_TITHI_NAMES.get(usize::from(tithi_index - 16)),
        _ => None,
    }
}

/// Name of a 0-based nakshatra index (0..=26).
pub fn nakshatra_name(index: u8) -> Option<&'static MultilingualText> {
    NAKSHATRA_NAMES.get(usize::from(index))
}

/// Name of a 0-based yoga index (0..=26).
pub fn yoga_name(index: u8) -> Option<&'static MultilingualText> {
    YOGA_NAMES.get(usize::from(index))
}

/// Name of a karana.
pub fn karana_name(karana: Karana) -> Option<&'static MultilingualText> {
    KARANA_NAMES.get(usize::from(karana.name_index()))
}

/// Name of a 0-based weekday index (0 = Sunday).
pub fn vaar_name(index: u8) -> Option<&'static MultilingualText> {
    VAAR_NAMES.get(usize::from(index))
}

pub fn paksha_name(paksha: Paksha) -> &'static MultilingualText {
    match paksha {
        Paksha::Shukla => &PAKSHA_NAMES[0],
        Paksha::Krishna => &PAKSHA_NAMES[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::karana::ALL_KARANAS;

    #[test]
    fn tithi_lookup() {
        assert_eq!(tithi_name(1).map(|n| n.en), Some("Pratipada"));
        assert_eq!(tithi_name(15).map(|n| n.en), Some("Purnima"));
        assert_eq!(tithi_name(16).map(|n| n.en), Some("Pratipada"));
        assert_eq!(tithi_name(30).map(|n| n.gu), Some("અમાવસ્યા"));
        assert!(tithi_name(0).is_none());
        assert!(tithi_name(31).is_none());
    }

    #[test]
    fn marathi_purnima_differs() {
        let p = tithi_name(15).unwrap();
        assert_eq!(p.get(Language::Mr), "पौर्णिमा");
        assert_eq!(p.get(Language::Hi), "पूर्णिमा");
    }

    #[test]
    fn out_of_range_is_none() {
        assert!(nakshatra_name(27).is_none());
        assert!(yoga_name(27).is_none());
        assert!(vaar_name(7).is_none());
    }

    #[test]
    fn every_karana_named() {
        for k in ALL_KARANAS {
            assert!(karana_name(k).is_some());
        }
        assert_eq!(karana_name(Karana::Vishti).unwrap().hi, "विष्टि");
    }

    #[test]
    fn no_empty_entries() {
        let tables: [&[MultilingualText]; 7] = [
            &SHUKLA_TITHI_NAMES,
            &KRISHNA_TITHI_NAMES,
            &NAKSHATRA_NAMES,
            &YOGA_NAMES,
            &KARANA_NAMES,
            &VAAR_NAMES,
            &PAKSHA_NAMES,
        ];
        for table in tables {
            for entry in table {
                for lang in Language::ALL {
                    assert!(!entry.get(lang).is_empty(), "{entry:?} missing {lang}");
                }
            }
        }
    }

    #[test]
    fn language_parse() {
        assert_eq!("GU".parse::<Language>(), Ok(Language::Gu));
        assert_eq!("marathi".parse::<Language>(), Ok(Language::Mr));
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::default(), Language::En);
        assert_eq!(serde_json::to_string(&Language::Hi).unwrap(), "\"hi\"");
    }

    #[test]
    fn paksha_names() {
        assert_eq!(paksha_name(Paksha::Krishna).en, "Krishna Paksha");
    }
}
