//! Store configuration document
//!
//! Typed view of the per-store configuration document. Every section carries
//! `#[serde(default)]` so partially written documents deserialize by filling
//! the gaps from the defaults, which is how merge-over-defaults loading works.

use serde::{Deserialize, Serialize};

/// Full configuration tree for one store
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    pub general: GeneralSection,
    pub colors: ColorsSection,
    pub logo: LogoSection,
    pub texts: TextsSection,
    pub social_media: SocialMediaSection,
    pub contact: ContactSection,
    pub images: ImagesSection,
    pub location: LocationSection,
}

impl StoreConfig {
    /// Top-level section keys as they appear in the stored document
    pub const SECTION_KEYS: &'static [&'static str] = &[
        "general",
        "colors",
        "logo",
        "texts",
        "socialMedia",
        "contact",
        "images",
        "location",
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneralSection {
    pub store_name: String,
    pub store_slogan: String,
    /// "physical", "online" or "mixed"
    pub store_type: String,
    pub meta_title: String,
    pub meta_description: String,
}

impl Default for GeneralSection {
    fn default() -> Self {
        Self {
            store_name: "Example Store".into(),
            store_slogan: "Professional Digital Catalog".into(),
            store_type: "physical".into(),
            meta_title: "Example Store | Digital Catalog Pro".into(),
            meta_description: "Discover quality products with the best online shopping experience."
                .into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorsSection {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
}

impl Default for ColorsSection {
    fn default() -> Self {
        Self {
            primary: "#2c3e50".into(),
            secondary: "#e74c3c".into(),
            accent: "#3498db".into(),
            background: "#f8f9fa".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoSection {
    /// "icon" or "image"
    #[serde(rename = "type")]
    pub kind: String,
    /// Uploaded image URL when `kind` is "image"
    pub image: Option<String>,
    pub width: u32,
    pub height: u32,
}

impl Default for LogoSection {
    fn default() -> Self {
        Self {
            kind: "icon".into(),
            image: None,
            width: 50,
            height: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextsSection {
    pub hero: HeroTexts,
    pub about: AboutTexts,
    pub mission: MissionTexts,
    pub products: ProductTexts,
    pub testimonials: TestimonialTexts,
    pub footer: FooterTexts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroTexts {
    pub slide1: Slide,
    pub slide2: Slide,
    pub slide3: Slide,
}

impl Default for HeroTexts {
    fn default() -> Self {
        Self {
            slide1: Slide {
                title: "Welcome to our store".into(),
                subtitle: "Discover quality products with the best online shopping experience. \
                           Your satisfaction is our priority."
                    .into(),
            },
            slide2: Slide {
                title: "Special Offers".into(),
                subtitle: "Take advantage of our exclusive discounts on selected products. \
                           For a limited time only!"
                    .into(),
            },
            slide3: Slide {
                title: "Digital Catalog".into(),
                subtitle: "Browse all our products from the comfort of your home. \
                           One-click WhatsApp orders."
                    .into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Slide {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutTexts {
    pub title: String,
    pub subtitle: String,
    pub content_title: String,
    pub content: String,
}

impl Default for AboutTexts {
    fn default() -> Self {
        Self {
            title: "About Our Store".into(),
            subtitle: "Over 10 years offering quality products and exceptional service."
                .into(),
            content_title: "Your trusted store".into(),
            content: "Founded in 2013, we have grown from a small local shop into a business \
                      recognized across the region. Our mission is to provide high-quality \
                      products at fair prices, combining the tradition of local commerce with \
                      the advantages of modern technology."
                .into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MissionTexts {
    pub title: String,
    pub subtitle: String,
    pub mission_content: String,
    pub vision_content: String,
}

impl Default for MissionTexts {
    fn default() -> Self {
        Self {
            title: "Our Philosophy".into(),
            subtitle: "The values that guide every decision and every interaction with our \
                       customers."
                .into(),
            mission_content: "Provide excellent products that improve our customers' daily \
                              lives, with an outstanding shopping experience both in store and \
                              through our digital catalog."
                .into(),
            vision_content: "Become the reference store of our community, recognized for \
                             quality, service and digital innovation."
                .into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductTexts {
    pub title: String,
    pub subtitle: String,
    pub product1: ProductCard,
    pub product2: ProductCard,
    pub product3: ProductCard,
}

impl Default for ProductTexts {
    fn default() -> Self {
        Self {
            title: "Featured Products".into(),
            subtitle: "Discover our most popular products and the best seasonal offers.".into(),
            product1: ProductCard {
                name: "Professional DSLR Camera".into(),
                description: "Capture unforgettable moments with this high-resolution camera \
                              and its included lens kit."
                    .into(),
                price: "$899.99".into(),
                old_price: "$1,199.99".into(),
                discount: "25% OFF".into(),
            },
            product2: ProductCard {
                name: "Sports Smartwatch".into(),
                description: "Track your health, get notifications and control your music from \
                              your wrist."
                    .into(),
                price: "$249.99".into(),
                old_price: String::new(),
                discount: "New".into(),
            },
            product3: ProductCard {
                name: "Premium Sport Shoes".into(),
                description: "Maximum comfort and style for everyday wear or training.".into(),
                price: "$129.99".into(),
                old_price: String::new(),
                discount: String::new(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductCard {
    pub name: String,
    pub description: String,
    pub price: String,
    pub old_price: String,
    pub discount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialTexts {
    pub title: String,
    pub subtitle: String,
    pub testimonial1: Testimonial,
    pub testimonial2: Testimonial,
    pub testimonial3: Testimonial,
}

impl Default for TestimonialTexts {
    fn default() -> Self {
        Self {
            title: "What our customers say".into(),
            subtitle: "The satisfaction of our customers is our greatest achievement.".into(),
            testimonial1: Testimonial {
                text: "Excellent service and top-quality products. The digital catalog let me \
                       order from home and receive it the next day."
                    .into(),
                author: "Maria Gonzalez".into(),
                position: "Customer since 2018".into(),
            },
            testimonial2: Testimonial {
                text: "The best store in the area. I always find what I need and the \
                       after-sales service is exceptional."
                    .into(),
                author: "Carlos Rodriguez".into(),
                position: "Frequent customer".into(),
            },
            testimonial3: Testimonial {
                text: "I love browsing every product from my phone and ordering over WhatsApp. \
                       Very practical and efficient!"
                    .into(),
                author: "Ana Martinez".into(),
                position: "Customer since 2020".into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    pub text: String,
    pub author: String,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterTexts {
    pub description: String,
    pub copyright: String,
}

impl Default for FooterTexts {
    fn default() -> Self {
        Self {
            description: "Your trusted store with over 10 years of experience. Quality, \
                          service and digital innovation."
                .into(),
            copyright: "© 2024 Example Store. All rights reserved.".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialMediaSection {
    pub facebook: SocialLink,
    pub instagram: SocialLink,
    pub whatsapp: SocialLink,
    pub tiktok: SocialLink,
    pub twitter: SocialLink,
    pub youtube: SocialLink,
}

impl Default for SocialMediaSection {
    fn default() -> Self {
        Self {
            facebook: SocialLink::inactive(),
            instagram: SocialLink::active(""),
            whatsapp: SocialLink::active("584123456789"),
            tiktok: SocialLink::inactive(),
            twitter: SocialLink::inactive(),
            youtube: SocialLink::inactive(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub active: bool,
    pub url: String,
}

impl SocialLink {
    fn active(url: &str) -> Self {
        Self {
            active: true,
            url: url.into(),
        }
    }

    fn inactive() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSection {
    pub address: String,
    pub city: String,
    pub country: String,
    pub phone: String,
    pub email: String,
    pub hours: OpeningHours,
    pub whatsapp_message: String,
}

impl Default for ContactSection {
    fn default() -> Self {
        Self {
            address: "1234 Main Avenue, Plaza Mayor Mall, Unit 45".into(),
            city: "Caracas".into(),
            country: "Venezuela".into(),
            phone: "581234567890".into(),
            email: "info@examplestore.com".into(),
            hours: OpeningHours::default(),
            whatsapp_message: "Hi, I would like more information about your products. Could \
                               you help me?"
                .into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpeningHours {
    pub weekdays: String,
    pub saturday: String,
    pub sunday: String,
    pub holidays: String,
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self {
            weekdays: "9:00 AM - 8:00 PM".into(),
            saturday: "9:00 AM - 6:00 PM".into(),
            sunday: "10:00 AM - 2:00 PM".into(),
            holidays: "Closed".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImagesSection {
    pub hero1: String,
    pub hero2: String,
    pub hero3: String,
    pub about: String,
    pub product1: String,
    pub product2: String,
    pub product3: String,
    pub testimonial1: String,
    pub testimonial2: String,
    pub testimonial3: String,
}

impl Default for ImagesSection {
    fn default() -> Self {
        let unsplash =
            |id: &str, w: u32| format!("https://images.unsplash.com/{id}?auto=format&fit=crop&w={w}&q=80");
        Self {
            hero1: unsplash("photo-1441986300917-64674bd600d8", 800),
            hero2: unsplash("photo-1556742049-0cfed4f6a45d", 800),
            hero3: unsplash("photo-1472851294608-062f824d29cc", 800),
            about: unsplash("photo-1556742049-0cfed4f6a45d", 800),
            product1: unsplash("photo-1526170375885-4d8ecf77b99f", 800),
            product2: unsplash("photo-1546868871-7041f2a55e12", 800),
            product3: unsplash("photo-1560769629-975ec94e6a86", 800),
            testimonial1: unsplash("photo-1494790108755-2616b612b786", 200),
            testimonial2: unsplash("photo-1507003211169-0a1dd7228f2d", 200),
            testimonial3: unsplash("photo-1438761681033-6461ffad8d80", 200),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationSection {
    /// "physical", "online" or "both"
    #[serde(rename = "type")]
    pub kind: String,
    pub google_maps_link: String,
    pub maps_embed_code: String,
    pub reference: String,
    pub coordinates: Coordinates,
    pub delivery: DeliveryInfo,
}

impl Default for LocationSection {
    fn default() -> Self {
        Self {
            kind: "physical".into(),
            google_maps_link: "https://goo.gl/maps/example".into(),
            maps_embed_code: String::new(),
            reference: "Inside the Plaza Mayor Mall, unit 45, across from the main fountain. \
                        Free parking available."
                .into(),
            coordinates: Coordinates {
                lat: 10.4806,
                lng: -66.9036,
            },
            delivery: DeliveryInfo {
                areas: "We deliver across the whole city. Nationwide shipping available at an \
                        extra cost depending on location."
                    .into(),
                time: "24-48 hours".into(),
                cost: "Free for orders over $50".into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveryInfo {
    pub areas: String,
    pub time: String,
    pub cost: String,
}
