use crate::domain::category::{FaqCategory, ServiceCategory};
use crate::domain::model::{
    AdditionalItem, BusinessHours, ContactInfo, FaqItem, LocationCoordinate, Service,
    ServicePackage, ServicePrice,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn extra(name: &str, price: i64, description: &str) -> AdditionalItem {
    AdditionalItem {
        name: name.to_string(),
        price,
        description: description.to_string(),
        is_optional: true,
    }
}

pub(super) fn sample_services() -> Vec<Service> {
    vec![
        Service {
            id: "funeral-full-service".to_string(),
            title: "殯葬一條龍服務".to_string(),
            subtitle: "完整專業的殯葬規劃".to_string(),
            description: "提供從往生者接體、防腐處理、告別式規劃到後續追思等完整服務，讓家屬在傷痛時刻能夠安心交託。".to_string(),
            features: strings(&[
                "24小時接體服務",
                "專業防腐處理",
                "告別式場地規劃",
                "宗教儀式安排",
                "後續法事服務",
            ]),
            price: Some(ServicePrice {
                included_items: strings(&["接體服務", "防腐處理", "告別式場地", "基本花籃佈置", "宗教儀式"]),
                additional_items: vec![
                    extra("高級花籃佈置", 15_000, "進口鮮花精緻佈置"),
                    extra("專業攝影服務", 8_000, "告別式全程攝影"),
                ],
                note: "價格依服務內容調整".to_string(),
                ..ServicePrice::new(280_000).with_range(180_000, 380_000)
            }),
            icon: "heart.fill".to_string(),
            category: ServiceCategory::Funeral,
            is_popular: true,
            estimated_duration: "3-7天".to_string(),
        },
        Service {
            id: "farewell-ceremony".to_string(),
            title: "告別式規劃".to_string(),
            subtitle: "莊嚴溫馨的告別儀式".to_string(),
            description: "專業規劃告別式流程，包含場地佈置、音響設備、宗教儀式等，讓親友能夠溫馨告別。".to_string(),
            features: strings(&[
                "場地佈置設計",
                "音響燈光設備",
                "宗教儀式安排",
                "司儀主持服務",
                "追思影片製作",
            ]),
            price: Some(ServicePrice {
                included_items: strings(&["基本場地佈置", "音響設備", "司儀服務"]),
                additional_items: vec![
                    extra("追思影片製作", 12_000, "專業影片剪輯製作"),
                    extra("花籃佈置升級", 20_000, "進口鮮花豪華佈置"),
                ],
                ..ServicePrice::new(80_000).with_range(50_000, 150_000)
            }),
            icon: "person.3.fill".to_string(),
            category: ServiceCategory::Ceremony,
            is_popular: true,
            estimated_duration: "1天".to_string(),
        },
        Service {
            id: "cemetery-columbarium".to_string(),
            title: "墓園納骨服務".to_string(),
            subtitle: "安息之地的專業安排".to_string(),
            description: "協助選擇合適的墓園或納骨塔位，處理相關手續，確保往生者能夠安息。".to_string(),
            features: strings(&[
                "塔位選擇諮詢",
                "合約手續辦理",
                "入塔儀式安排",
                "後續維護服務",
                "家屬關懷服務",
            ]),
            price: Some(ServicePrice {
                included_items: strings(&["塔位使用權", "基本入塔儀式", "相關手續辦理"]),
                note: "價格依塔位等級而定".to_string(),
                ..ServicePrice::new(150_000).with_range(80_000, 300_000)
            }),
            icon: "house.fill".to_string(),
            category: ServiceCategory::Cemetery,
            is_popular: false,
            estimated_duration: "1-2天".to_string(),
        },
        Service {
            id: "memorial-remembrance".to_string(),
            title: "紀念追思服務".to_string(),
            subtitle: "永續的愛與思念".to_string(),
            description: "提供各種紀念追思服務，讓逝者的愛與精神得以延續，為家屬帶來慰藉。".to_string(),
            features: strings(&[
                "追思會規劃",
                "紀念品製作",
                "影像紀錄服務",
                "線上追思平台",
                "週年追思安排",
            ]),
            price: Some(ServicePrice {
                included_items: strings(&["基本追思會規劃", "紀念冊製作", "線上追思頁面"]),
                ..ServicePrice::new(25_000).with_range(15_000, 50_000)
            }),
            icon: "star.fill".to_string(),
            category: ServiceCategory::Memorial,
            is_popular: false,
            estimated_duration: "彈性安排".to_string(),
        },
        Service {
            id: "family-support".to_string(),
            title: "家屬關懷支援".to_string(),
            subtitle: "專業心理與生活支援".to_string(),
            description: "在困難時刻提供專業的心理支援與生活協助，陪伴家屬度過哀傷期。".to_string(),
            features: strings(&[
                "心理諮商服務",
                "法律諮詢協助",
                "保險理賠協助",
                "生活支援服務",
                "後續關懷追蹤",
            ]),
            price: Some(ServicePrice {
                included_items: strings(&["初次諮詢", "基本協助服務"]),
                note: "部分服務免費提供".to_string(),
                ..ServicePrice::new(5_000).with_range(3_000, 10_000)
            }),
            icon: "hands.sparkles.fill".to_string(),
            category: ServiceCategory::Support,
            is_popular: true,
            estimated_duration: "持續服務".to_string(),
        },
    ]
}

pub(super) fn sample_packages() -> Vec<ServicePackage> {
    vec![
        ServicePackage {
            id: "basic-peace".to_string(),
            title: "基礎安心方案".to_string(),
            description: "提供基本但完整的殯葬服務，經濟實惠且有品質保證".to_string(),
            included_services: strings(&["基本告別式規劃", "接體防腐服務", "基本場地佈置", "宗教儀式安排"]),
            total_price: 150_000,
            original_price: 180_000,
            is_recommended: false,
            valid_until: None,
        },
        ServicePackage {
            id: "standard-warmth".to_string(),
            title: "標準溫馨方案".to_string(),
            description: "最受歡迎的服務組合，平衡品質與價格的最佳選擇".to_string(),
            included_services: strings(&[
                "完整告別式規劃",
                "專業殯葬服務",
                "精美場地佈置",
                "追思影片製作",
                "家屬關懷服務",
            ]),
            total_price: 250_000,
            original_price: 320_000,
            is_recommended: true,
            valid_until: None,
        },
        ServicePackage {
            id: "premium-honor".to_string(),
            title: "豪華尊榮方案".to_string(),
            description: "最高規格的服務品質，為重要人士提供尊榮告別".to_string(),
            included_services: strings(&[
                "頂級告別式規劃",
                "豪華殯葬服務",
                "進口花材佈置",
                "專業攝影錄影",
                "VIP專屬服務",
                "長期關懷服務",
            ]),
            total_price: 380_000,
            original_price: 480_000,
            is_recommended: false,
            valid_until: None,
        },
    ]
}

pub(super) fn sample_faqs() -> Vec<FaqItem> {
    let faq = |id: &str, question: &str, answer: &str, category: FaqCategory, priority: i32| FaqItem {
        id: id.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
        category,
        priority,
    };

    vec![
        faq(
            "service-area",
            "服務範圍涵蓋哪些地區？",
            "我們主要服務宜蘭縣全境，包括宜蘭市、羅東鎮、冬山鄉等各鄉鎮市。對於鄰近縣市的緊急需求，我們也會視情況提供協助。",
            FaqCategory::General,
            1,
        ),
        faq(
            "emergency-arrival",
            "緊急情況下多久可以到達？",
            "我們承諾在接到緊急通知後30分鐘內趕達現場（宜蘭縣內）。我們的專業團隊24小時待命，隨時為您提供即時協助。",
            FaqCategory::Emergency,
            2,
        ),
        faq(
            "free-consultation",
            "是否提供免費諮詢服務？",
            "是的，我們提供完全免費的諮詢服務。您可以透過電話、LINE、現場參觀等方式，我們的專業團隊會詳細為您說明服務內容與流程。",
            FaqCategory::Service,
            3,
        ),
        faq(
            "facility-visit",
            "如何預約參觀設施？",
            "您可以透過電話或線上表單預約參觀時間。建議您事先預約，我們會安排專人為您導覽介紹，讓您更了解我們的服務環境。",
            FaqCategory::Process,
            4,
        ),
        faq(
            "pricing",
            "服務價格如何計算？",
            "我們的服務價格依據服務內容、規模和個人需求而定。基礎方案從NT$150,000起，標準方案NT$250,000起，豪華方案NT$380,000起。詳細報價會根據您的具體需求提供。",
            FaqCategory::Pricing,
            5,
        ),
    ]
}

pub(super) fn default_contact_info() -> ContactInfo {
    ContactInfo {
        phone: "0935571189".to_string(),
        emergency_phone: "0935571189".to_string(),
        line_id: "@dongshan-life".to_string(),
        email: "service@dongshan-life.com.tw".to_string(),
        address: "宜蘭縣冬山鄉冬山路160號".to_string(),
        website: "https://dongshan-life.com.tw".to_string(),
        business_hours: BusinessHours {
            office: "週一至週日 08:00-18:00".to_string(),
            weekend: "週六日 09:00-17:00".to_string(),
            holiday: "國定假日 10:00-16:00".to_string(),
            emergency: "24小時全年無休".to_string(),
        },
        location: LocationCoordinate {
            latitude: 24.6394,
            longitude: 121.7900,
        },
        transportation_info: strings(&[
            "國道5號冬山交流道下，約5分鐘車程",
            "台鐵冬山站步行約10分鐘",
            "免費停車場提供便民服務",
            "無障礙設施完善",
        ]),
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        default_contact_info()
    }
}
