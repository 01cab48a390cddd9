//! Canned tourism copy: topic answers, FAQs and stock replies.

use serde::Serialize;

use super::language::Language;

/// Topics with a prepared answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Destinations,
    Itinerary,
    Marketplace,
    Weather,
    Transport,
}

/// A frequently asked question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [Faq; 5] = [
    Faq {
        question: "What is the best time to visit Jharkhand?",
        answer: "The best time to visit Jharkhand is from October to March when the weather is pleasant and ideal for sightseeing and outdoor activities.",
    },
    Faq {
        question: "How do I reach Ranchi?",
        answer: "Ranchi is well-connected by air, rail, and road. Birsa Munda Airport connects to major Indian cities. Regular trains and buses are available from neighboring states.",
    },
    Faq {
        question: "What are the must-visit waterfalls in Jharkhand?",
        answer: "The top waterfalls include Hundru Falls (98m), Dassam Falls (44m), Jonha Falls (43m), and Hirni Falls. Each offers unique scenic beauty and trekking opportunities.",
    },
    Faq {
        question: "Is it safe for solo travelers?",
        answer: "Yes, Jharkhand is generally safe for solo travelers. However, it's recommended to stay in well-reviewed accommodations and inform someone about your travel plans.",
    },
    Faq {
        question: "What local handicrafts can I buy?",
        answer: "Popular handicrafts include Dokra art, bamboo products, Tussar silk, tribal jewelry, pottery, and handwoven baskets. Visit local markets and certified vendors.",
    },
];

/// Prepared answer for `topic`, in `language` when translated.
pub fn topic_response(topic: Topic, language: Language) -> &'static str {
    match (topic, language) {
        (Topic::Destinations, Language::Hi) => "झारखंड के प्रमुख गंतव्य यहाँ हैं:\n\n🏔️ **रांची** - रॉक गार्डन और टैगोर हिल के साथ राजधानी शहर\n🌅 **नेतरहाट** - छोटानागपुर की रानी, सूर्योदय के लिए प्रसिद्ध\n🏛️ **देवघर** - बैद्यनाथ मंदिर के साथ पवित्र शहर\n💧 **हुंडरू फॉल्स** - शानदार 98 मीटर का झरना\n🦌 **हजारीबाग राष्ट्रीय उद्यान** - वन्यजीव अभयारण्य",
        (Topic::Destinations, _) => "Here are the top destinations in Jharkhand:\n\n🏔️ **Ranchi** - Capital city with Rock Garden and Tagore Hill\n🌅 **Netarhat** - Queen of Chotanagpur, famous for sunrise views\n🏛️ **Deoghar** - Sacred city with Baidyanath Temple\n💧 **Hundru Falls** - Spectacular 98m waterfall\n🦌 **Hazaribagh National Park** - Wildlife sanctuary\n\nWould you like detailed information about any specific destination?",
        (Topic::Itinerary, Language::Hi) => "मैं आपको एक परफेक्ट यात्रा कार्यक्रम बनाने में मदद कर सकता हूँ! यहाँ कुछ लोकप्रिय विकल्प हैं:\n\n📅 **2-3 दिन**: रांची + हुंडरू फॉल्स\n📅 **4-5 दिन**: रांची + नेतरहाट + देवघर\n📅 **7+ दिन**: आदिवासी गांवों के साथ पूर्ण झारखंड यात्रा",
        (Topic::Itinerary, _) => "I can help you create a perfect itinerary! Here are some popular options:\n\n📅 **2-3 Days**: Ranchi + Hundru Falls\n📅 **4-5 Days**: Ranchi + Netarhat + Deoghar\n📅 **7+ Days**: Complete Jharkhand tour with tribal villages\n\nTo create a personalized itinerary, I need to know:\n• Your travel dates\n• Group size\n• Interests (adventure, culture, nature)\n• Budget range\n\nShall we start planning your trip?",
        (Topic::Marketplace, Language::Hi) => "हमारे बाज़ार में प्रामाणिक झारखंड उत्पादों की खोज करें:\n\n🎨 **हस्तशिल्प**: डोकरा कला, बांस उत्पाद\n👗 **वस्त्र**: तसर सिल्क साड़ी, आदिवासी कपड़े\n💍 **आभूषण**: पारंपरिक चांदी के गहने\n🍯 **भोजन**: जैविक शहद, आदिवासी मसाले",
        (Topic::Marketplace, _) => "Discover authentic Jharkhand products in our marketplace:\n\n🎨 **Handicrafts**: Dokra art, bamboo products\n👗 **Textiles**: Tussar silk sarees, tribal clothing\n💍 **Jewelry**: Traditional silver ornaments\n🍯 **Food**: Organic honey, tribal spices\n🏺 **Pottery**: Handmade clay items\n🏠 **Homestays**: Authentic village experiences\n\nAll vendors are verified and many are blockchain-certified. Would you like to explore any specific category?",
        (Topic::Weather, Language::Hi) => "झारखंड के लिए वर्तमान मौसम की जानकारी:\n\n🌤️ **आज**: सुहावना, 22-28°C\n📅 **इस सप्ताह**: अधिकतर धूप, कभी-कभी बादल\n🌧️ **मानसून**: जुलाई-सितंबर (भारी बारिश)\n❄️ **सर्दी**: दिसंबर-फरवरी (10-25°C)",
        (Topic::Weather, _) => "Current weather information for Jharkhand:\n\n🌤️ **Today**: Pleasant, 22-28°C\n📅 **This Week**: Mostly sunny with occasional clouds\n🌧️ **Monsoon**: July-September (heavy rainfall)\n❄️ **Winter**: December-February (10-25°C)\n☀️ **Summer**: March-June (25-40°C)\n\nBest time to visit is October-March for comfortable weather!",
        (Topic::Transport, Language::Hi) => "झारखंड में परिवहन विकल्प:\n\n✈️ **हवाई जहाज से**: बिरसा मुंडा हवाई अड्डा, रांची\n🚂 **ट्रेन से**: प्रमुख शहरों से अच्छी तरह जुड़ा\n🚌 **बस से**: राज्य और निजी बस सेवाएं\n🚗 **स्थानीय परिवहन**: टैक्सी, ऑटो-रिक्शा, ऐप कैब",
        (Topic::Transport, _) => "Transportation options in Jharkhand:\n\n✈️ **By Air**: Birsa Munda Airport, Ranchi\n🚂 **By Train**: Well-connected to major cities\n🚌 **By Bus**: State and private bus services\n🚗 **Local Transport**: Taxis, auto-rickshaws, app cabs\n🏍️ **Bike Rental**: Available in major cities\n\nFor bookings and schedules, I can connect you with our travel partners!",
    }
}

pub fn greeting(language: Language) -> &'static str {
    match language {
        Language::Hi => "नमस्ते! मैं आपका झारखंड पर्यटन सहायक हूँ। मैं आपकी कैसे मदद कर सकता हूँ?",
        _ => "Hello! I'm your Jharkhand Tourism assistant. How can I help you today?",
    }
}

pub fn thanks(language: Language) -> &'static str {
    match language {
        Language::Hi => "आपका स्वागत है! क्या मैं आपकी और कोई मदद कर सकता हूँ?",
        _ => "You're welcome! Is there anything else I can help you with?",
    }
}

pub fn opening_application(language: Language) -> &'static str {
    match language {
        Language::Hi => "मैं आपके लिए आवेदन फॉर्म खोल रहा हूँ!",
        _ => "I'm opening the application form for you!",
    }
}

pub fn fallback(language: Language) -> &'static str {
    match language {
        Language::Hi => "मुझे खुशी होगी आपकी मदद करने में! आप मुझसे झारखंड के गंतव्यों, यात्रा योजना, स्थानीय उत्पादों, या किसी भी पर्यटन संबंधी प्रश्न के बारे में पूछ सकते हैं।",
        _ => "I'd be happy to help! You can ask me about Jharkhand destinations, trip planning, local products, or any tourism-related questions.",
    }
}

/// Hint shown in the empty message box.
pub fn input_placeholder(language: Language) -> &'static str {
    match language {
        Language::Hi => "अपना संदेश टाइप करें...",
        _ => "Type your message...",
    }
}

/// Caption under the message box.
pub fn footer(language: Language) -> &'static str {
    match language {
        Language::Hi => "झारखंड पर्यटन सहायक - यहाँ मदद के लिए",
        _ => "Jharkhand Tourism Assistant - Here to help",
    }
}

/// Numbered listing of every FAQ with its answer.
pub fn faq_listing() -> String {
    let body = FAQS
        .iter()
        .enumerate()
        .map(|(i, faq)| format!("**{}. {}**\n{}\n", i + 1, faq.question, faq.answer))
        .collect::<Vec<_>>()
        .join("\n");
    format!("Here are some frequently asked questions:\n\n{}", body)
}
