//! Egypt address data: the country, its governorates, and their cities.
//!
//! The store ships to one country. The governorate list feeds the shipping
//! form's dropdown, and each governorate carries the city set the UI offers
//! once it is selected. Names are bilingual; delivery pricing only ever
//! looks at the final city string, not at this table.

use morshd_core::Locale;

/// A place name in both supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedName {
    /// English name.
    pub en: &'static str,
    /// Arabic name.
    pub ar: &'static str,
}

impl LocalizedName {
    /// The name in the requested locale.
    #[must_use]
    pub const fn in_locale(&self, locale: Locale) -> &'static str {
        if locale.is_rtl() { self.ar } else { self.en }
    }
}

/// A governorate and the cities the store delivers to within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Governorate {
    /// Governorate name.
    pub name: LocalizedName,
    /// Cities offered once this governorate is selected.
    pub cities: &'static [LocalizedName],
}

/// The single country the store serves.
pub const COUNTRY: LocalizedName = LocalizedName {
    en: "Egypt",
    ar: "مصر",
};

macro_rules! name {
    ($en:expr, $ar:expr) => {
        LocalizedName { en: $en, ar: $ar }
    };
}

/// All governorates of Egypt, with their city sets.
pub static GOVERNORATES: &[Governorate] = &[
    Governorate {
        name: name!("Cairo", "القاهرة"),
        cities: &[
            name!("Cairo", "القاهرة"),
            name!("Nasr City", "مدينة نصر"),
            name!("Heliopolis", "هليوبوليس"),
            name!("Maadi", "المعادي"),
            name!("Dokki", "الدقي"),
            name!("Giza", "الجيزة"),
            name!("6th October", "السادس من أكتوبر"),
            name!("Shorouk", "الشروق"),
            name!("New Cairo", "القاهرة الجديدة"),
            name!("Badr", "بدر"),
        ],
    },
    Governorate {
        name: name!("Giza", "الجيزة"),
        cities: &[
            name!("Giza", "الجيزة"),
            name!("6th October", "السادس من أكتوبر"),
            name!("Sheikh Zayed", "الشيخ زايد"),
            name!("Haram", "الهرم"),
            name!("Faisal", "فيصل"),
            name!("Imbaba", "إمبابة"),
            name!("Agouza", "العجوزة"),
        ],
    },
    Governorate {
        name: name!("Alexandria", "الإسكندرية"),
        cities: &[
            name!("Alexandria", "الإسكندرية"),
            name!("Borg El Arab", "برج العرب"),
            name!("Montaza", "المنتزه"),
            name!("Smouha", "سموحة"),
            name!("Miami", "ميامي"),
            name!("Sidi Gaber", "سيدي جابر"),
        ],
    },
    Governorate {
        name: name!("Gharbiya", "الغربية"),
        cities: &[
            name!("Tanta", "طنطا"),
            name!("El Mahalla El Kubra", "المحلة الكبرى"),
            name!("Kafr El Zayat", "كفر الزيات"),
            name!("Zefta", "زفتى"),
            name!("Samanoud", "سمنود"),
            name!("Basyoun", "بسيون"),
            name!("Kotoor", "قطور"),
        ],
    },
    Governorate {
        name: name!("Dakahlia", "الدقهلية"),
        cities: &[
            name!("Mansoura", "المنصورة"),
            name!("Talkha", "طلخا"),
            name!("Mit Ghamr", "ميت غمر"),
            name!("Belqas", "بلقاس"),
            name!("Dekernes", "دكرنس"),
        ],
    },
    Governorate {
        name: name!("Beheira", "البحيرة"),
        cities: &[
            name!("Damanhur", "دمنهور"),
            name!("Kafr El Dawwar", "كفر الدوار"),
            name!("Rashid", "رشيد"),
            name!("Edku", "إدكو"),
            name!("Abu El Matamir", "أبو المطامير"),
        ],
    },
    Governorate {
        name: name!("Menofia", "المنوفية"),
        cities: &[
            name!("Shibin El Kom", "شبين الكوم"),
            name!("Menouf", "منوف"),
            name!("Ashmoun", "أشمون"),
            name!("Quesna", "قويسنا"),
            name!("Sadat City", "مدينة السادات"),
        ],
    },
    Governorate {
        name: name!("Sharqia", "الشرقية"),
        cities: &[
            name!("Zagazig", "الزقازيق"),
            name!("10th of Ramadan", "العاشر من رمضان"),
            name!("Belbeis", "بلبيس"),
            name!("Minya El Qamh", "منيا القمح"),
            name!("Faquus", "فاقوس"),
        ],
    },
    Governorate {
        name: name!("Qaliubiya", "القليوبية"),
        cities: &[
            name!("Banha", "بنها"),
            name!("Qalyub", "قليوب"),
            name!("Shubra El Kheima", "شبرا الخيمة"),
            name!("Khanka", "الخانكة"),
            name!("Obour", "العبور"),
        ],
    },
    Governorate {
        name: name!("Ismailia", "الإسماعيلية"),
        cities: &[
            name!("Ismailia", "الإسماعيلية"),
            name!("Fayed", "فايد"),
            name!("Qantara", "القنطرة"),
            name!("Abu Suweir", "أبو صوير"),
        ],
    },
    Governorate {
        name: name!("Suez", "السويس"),
        cities: &[
            name!("Suez", "السويس"),
            name!("Ain Sokhna", "العين السخنة"),
            name!("Faisal", "فيصل"),
        ],
    },
    Governorate {
        name: name!("Port Said", "بورسعيد"),
        cities: &[name!("Port Said", "بورسعيد"), name!("Port Fouad", "بورفؤاد")],
    },
    Governorate {
        name: name!("Damietta", "دمياط"),
        cities: &[
            name!("Damietta", "دمياط"),
            name!("Ras El Bar", "رأس البر"),
            name!("Kafr Saad", "كفر سعد"),
        ],
    },
    Governorate {
        name: name!("Red Sea", "البحر الأحمر"),
        cities: &[
            name!("Hurghada", "الغردقة"),
            name!("Marsa Alam", "مرسى علم"),
            name!("Safaga", "سفاجا"),
            name!("El Qoseir", "القصير"),
        ],
    },
    Governorate {
        name: name!("Fayoum", "الفيوم"),
        cities: &[
            name!("Fayoum", "الفيوم"),
            name!("Tamiya", "طامية"),
            name!("Senouras", "سنورس"),
        ],
    },
    Governorate {
        name: name!("Beni Suef", "بني سويف"),
        cities: &[
            name!("Beni Suef", "بني سويف"),
            name!("Nasser", "ناصر"),
            name!("Biba", "ببا"),
        ],
    },
    Governorate {
        name: name!("Minya", "المنيا"),
        cities: &[
            name!("Minya", "المنيا"),
            name!("Maghagha", "مغاغة"),
            name!("Samalut", "سمالوط"),
            name!("Malawi", "ملوي"),
        ],
    },
    Governorate {
        name: name!("Assiut", "أسيوط"),
        cities: &[
            name!("Assiut", "أسيوط"),
            name!("Dayrout", "ديروط"),
            name!("Manfalut", "منفلوط"),
            name!("Abnub", "أبنوب"),
        ],
    },
    Governorate {
        name: name!("Sohag", "سوهاج"),
        cities: &[
            name!("Sohag", "سوهاج"),
            name!("Akhmim", "أخميم"),
            name!("Girga", "جرجا"),
            name!("Tema", "طما"),
        ],
    },
    Governorate {
        name: name!("Qena", "قنا"),
        cities: &[
            name!("Qena", "قنا"),
            name!("Luxor", "الأقصر"),
            name!("Qus", "قوص"),
            name!("Naqada", "نقادة"),
        ],
    },
    Governorate {
        name: name!("Luxor", "الأقصر"),
        cities: &[
            name!("Luxor", "الأقصر"),
            name!("Esna", "إسنا"),
            name!("Armant", "أرمنت"),
        ],
    },
    Governorate {
        name: name!("Aswan", "أسوان"),
        cities: &[
            name!("Aswan", "أسوان"),
            name!("Kom Ombo", "كوم أمبو"),
            name!("Edfu", "إدفو"),
        ],
    },
    Governorate {
        name: name!("Kafr El Sheikh", "كفر الشيخ"),
        cities: &[
            name!("Kafr El Sheikh", "كفر الشيخ"),
            name!("Desouk", "دسوق"),
            name!("Bila", "بيلا"),
            name!("Fuwa", "فوه"),
        ],
    },
    Governorate {
        name: name!("North Sinai", "شمال سيناء"),
        cities: &[
            name!("El Arish", "العريش"),
            name!("Sheikh Zuweid", "الشيخ زويد"),
            name!("Rafah", "رفح"),
        ],
    },
    Governorate {
        name: name!("South Sinai", "جنوب سيناء"),
        cities: &[
            name!("Sharm El Sheikh", "شرم الشيخ"),
            name!("Dahab", "دهب"),
            name!("Nuweiba", "نويبع"),
            name!("Saint Catherine", "سانت كاترين"),
        ],
    },
    Governorate {
        name: name!("New Valley", "الوادي الجديد"),
        cities: &[
            name!("Kharga", "الخارجة"),
            name!("Dakhla", "الداخلة"),
            name!("Farafra", "الفرافرة"),
        ],
    },
    Governorate {
        name: name!("Matrouh", "مطروح"),
        cities: &[
            name!("Marsa Matrouh", "مرسى مطروح"),
            name!("El Alamein", "العلمين"),
            name!("Siwa", "سيوة"),
        ],
    },
];

/// Look up a governorate by its English name.
#[must_use]
pub fn find(governorate_en: &str) -> Option<&'static Governorate> {
    GOVERNORATES.iter().find(|g| g.name.en == governorate_en)
}

/// Cities of a governorate, empty when the name is unknown.
#[must_use]
pub fn cities_of(governorate_en: &str) -> &'static [LocalizedName] {
    find(governorate_en).map_or(&[], |g| g.cities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_governorates_present() {
        assert_eq!(GOVERNORATES.len(), 27);
    }

    #[test]
    fn test_find_known() {
        let gharbiya = find("Gharbiya").expect("Gharbiya exists");
        assert_eq!(gharbiya.name.ar, "الغربية");
        assert!(gharbiya.cities.iter().any(|c| c.en == "Tanta"));
    }

    #[test]
    fn test_cities_of_unknown_is_empty() {
        assert!(cities_of("Atlantis").is_empty());
    }

    #[test]
    fn test_every_governorate_has_cities() {
        for governorate in GOVERNORATES {
            assert!(
                !governorate.cities.is_empty(),
                "{} has no cities",
                governorate.name.en
            );
        }
    }

    #[test]
    fn test_localized_names() {
        assert_eq!(COUNTRY.in_locale(Locale::En), "Egypt");
        assert_eq!(COUNTRY.in_locale(Locale::Ar), "مصر");
    }
}
