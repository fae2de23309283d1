//! Built-in mock catalog.
//!
//! The storefront has no backend; this module is the whole data set. IDs are
//! deterministic (`AggregateId::from_u128`) so tests and logs stay stable
//! across runs.

use chrono::{DateTime, NaiveDate, Utc};

use digitalden_core::{AggregateId, Money};

use crate::category::Category;
use crate::creator::{Creator, CreatorId, SocialLinks};
use crate::product::{Product, ProductId};
use crate::review::{Review, ReviewId};
use crate::store::Catalog;

fn product_id(n: u128) -> ProductId {
    ProductId::new(AggregateId::from_u128(0x0100 + n))
}

fn creator_id(n: u128) -> CreatorId {
    CreatorId::new(AggregateId::from_u128(0x0200 + n))
}

fn review_id(n: u128) -> ReviewId {
    ReviewId::new(AggregateId::from_u128(0x0300 + n))
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed date is valid")
}

fn timestamp(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    date(year, month, day)
        .and_hms_opt(0, 0, 0)
        .expect("seed time is valid")
        .and_utc()
}

/// The full mock catalog, validated and indexed.
pub fn catalog() -> Catalog {
    Catalog::new(products(), creators(), categories(), reviews())
        .expect("seed catalog is internally consistent")
}

pub fn categories() -> Vec<Category> {
    vec![
        Category {
            slug: "ui-kits".to_string(),
            name: "UI Kits".to_string(),
            description: "Complete design systems and component libraries".to_string(),
            icon: "Palette".to_string(),
            accent: "from-blue-500 to-cyan-500".to_string(),
            count: 156,
        },
        Category {
            slug: "templates".to_string(),
            name: "Templates".to_string(),
            description: "Ready-to-use website and app templates".to_string(),
            icon: "Layout".to_string(),
            accent: "from-purple-500 to-pink-500".to_string(),
            count: 89,
        },
        Category {
            slug: "icons".to_string(),
            name: "Icons".to_string(),
            description: "High-quality icon packs and illustrations".to_string(),
            icon: "Star".to_string(),
            accent: "from-orange-500 to-red-500".to_string(),
            count: 234,
        },
        Category {
            slug: "ai-prompts".to_string(),
            name: "AI Prompts".to_string(),
            description: "Curated prompts for AI tools and workflows".to_string(),
            icon: "Zap".to_string(),
            accent: "from-green-500 to-emerald-500".to_string(),
            count: 67,
        },
        Category {
            slug: "graphics".to_string(),
            name: "Graphics".to_string(),
            description: "Illustrations, patterns, and design elements".to_string(),
            icon: "Image".to_string(),
            accent: "from-indigo-500 to-blue-500".to_string(),
            count: 123,
        },
        Category {
            slug: "fonts".to_string(),
            name: "Fonts".to_string(),
            description: "Premium typography and font families".to_string(),
            icon: "Type".to_string(),
            accent: "from-pink-500 to-rose-500".to_string(),
            count: 45,
        },
    ]
}

pub fn creators() -> Vec<Creator> {
    vec![
        Creator {
            id: creator_id(1),
            handle: "sarahdesigns".to_string(),
            name: "Sarah Chen".to_string(),
            bio: "Product designer crafting design systems and UI kits that teams \
                  actually enjoy using."
                .to_string(),
            avatar: "https://images.unsplash.com/photo-1494790108755?w=150&h=150".to_string(),
            verified: true,
            rating: 4.9,
            product_count: 24,
            sales_count: 15_600,
            review_count: 892,
            joined_date: date(2021, 3, 12),
            location: Some("San Francisco, CA".to_string()),
            specialties: vec!["UI Design".to_string(), "Design Systems".to_string()],
            social: SocialLinks {
                website: Some("https://sarahchen.design".to_string()),
                twitter: Some("@sarahdesigns".to_string()),
                instagram: None,
            },
        },
        Creator {
            id: creator_id(2),
            handle: "pixelcraft".to_string(),
            name: "PixelCraft Studio".to_string(),
            bio: "A two-person studio obsessed with pixel-perfect icons and admin \
                  templates."
                .to_string(),
            avatar: "https://images.unsplash.com/photo-1522071820081?w=150&h=150".to_string(),
            verified: true,
            rating: 4.8,
            product_count: 41,
            sales_count: 23_400,
            review_count: 1_205,
            joined_date: date(2020, 8, 1),
            location: Some("Berlin, Germany".to_string()),
            specialties: vec!["Icons".to_string(), "Templates".to_string()],
            social: SocialLinks {
                website: Some("https://pixelcraft.studio".to_string()),
                twitter: None,
                instagram: Some("@pixelcraft.studio".to_string()),
            },
        },
        Creator {
            id: creator_id(3),
            handle: "marcuswebb".to_string(),
            name: "Marcus Webb".to_string(),
            bio: "Exploring the overlap of AI workflows and visual design. Prompts, \
                  gradients, and the occasional experiment."
                .to_string(),
            avatar: "https://images.unsplash.com/photo-1507003211169?w=150&h=150".to_string(),
            verified: false,
            rating: 4.6,
            product_count: 12,
            sales_count: 5_800,
            review_count: 340,
            joined_date: date(2022, 11, 5),
            location: Some("Austin, TX".to_string()),
            specialties: vec!["AI Workflows".to_string(), "Graphics".to_string()],
            social: SocialLinks {
                website: None,
                twitter: Some("@marcuswebb".to_string()),
                instagram: None,
            },
        },
        Creator {
            id: creator_id(4),
            handle: "novatype".to_string(),
            name: "Nova Type Foundry".to_string(),
            bio: "Independent foundry shipping display faces and hand-drawn \
                  illustration sets since 2019."
                .to_string(),
            avatar: "https://images.unsplash.com/photo-1519085360753?w=150&h=150".to_string(),
            verified: true,
            rating: 4.9,
            product_count: 18,
            sales_count: 7_200,
            review_count: 510,
            joined_date: date(2019, 6, 20),
            location: Some("Lisbon, Portugal".to_string()),
            specialties: vec!["Typography".to_string(), "Illustration".to_string()],
            social: SocialLinks {
                website: Some("https://novatype.pt".to_string()),
                twitter: None,
                instagram: None,
            },
        },
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: product_id(1),
            slug: "minimalist-ui-kit".to_string(),
            title: "Minimalist UI Kit".to_string(),
            description: "A complete design system with 200+ components, dark mode \
                          variants, and a fully organized Figma file. Built for rapid \
                          prototyping and production handoff alike."
                .to_string(),
            short_description: "200+ component design system for Figma and React.".to_string(),
            category: "ui-kits".to_string(),
            tags: vec![
                "figma".to_string(),
                "design-system".to_string(),
                "components".to_string(),
            ],
            price: Money::from_cents(4900),
            original_price: Money::from_cents(7900),
            rating: 4.9,
            review_count: 128,
            sales_count: 2_340,
            creator_id: creator_id(1),
            images: vec![
                "https://images.unsplash.com/photo-1586717791821?w=800".to_string(),
                "https://images.unsplash.com/photo-1559028012?w=800".to_string(),
            ],
            preview_url: "https://preview.digitalden.dev/minimalist-ui-kit".to_string(),
            featured: true,
            trending: false,
            created_at: timestamp(2024, 3, 15),
            updated_at: timestamp(2024, 7, 1),
        },
        Product {
            id: product_id(2),
            slug: "dashboard-template-pro".to_string(),
            title: "Dashboard Template Pro".to_string(),
            description: "Production-ready React admin template with 40+ screens, \
                          charts, tables, and auth flows. TypeScript throughout, \
                          themed with CSS variables."
                .to_string(),
            short_description: "React admin template with 40+ screens.".to_string(),
            category: "templates".to_string(),
            tags: vec![
                "react".to_string(),
                "admin".to_string(),
                "dashboard".to_string(),
            ],
            price: Money::from_cents(5900),
            original_price: Money::from_cents(5900),
            rating: 4.8,
            review_count: 94,
            sales_count: 1_876,
            creator_id: creator_id(2),
            images: vec!["https://images.unsplash.com/photo-1551288049?w=800".to_string()],
            preview_url: "https://preview.digitalden.dev/dashboard-template-pro".to_string(),
            featured: true,
            trending: true,
            created_at: timestamp(2024, 5, 2),
            updated_at: timestamp(2024, 7, 18),
        },
        Product {
            id: product_id(3),
            slug: "premium-icon-pack".to_string(),
            title: "Premium Icon Pack".to_string(),
            description: "1,200 pixel-perfect icons in outline, filled, and duotone \
                          styles. Ships as SVG, icon font, and a Figma library with \
                          auto-layout friendly frames."
                .to_string(),
            short_description: "1,200 icons in three styles, SVG + Figma.".to_string(),
            category: "icons".to_string(),
            tags: vec!["icons".to_string(), "svg".to_string(), "figma".to_string()],
            price: Money::from_cents(2400),
            original_price: Money::from_cents(3200),
            rating: 4.9,
            review_count: 211,
            sales_count: 5_120,
            creator_id: creator_id(2),
            images: vec!["https://images.unsplash.com/photo-1558655146?w=800".to_string()],
            preview_url: "https://preview.digitalden.dev/premium-icon-pack".to_string(),
            featured: false,
            trending: true,
            created_at: timestamp(2023, 11, 8),
            updated_at: timestamp(2024, 6, 20),
        },
        Product {
            id: product_id(4),
            slug: "chatgpt-prompts-mega".to_string(),
            title: "ChatGPT Prompts Mega Bundle".to_string(),
            description: "650 curated prompts across copywriting, coding, research, \
                          and design critique, organized by workflow with usage notes \
                          for each."
                .to_string(),
            short_description: "650 curated prompts organized by workflow.".to_string(),
            category: "ai-prompts".to_string(),
            tags: vec![
                "ai".to_string(),
                "prompts".to_string(),
                "productivity".to_string(),
            ],
            price: Money::from_cents(1900),
            original_price: Money::from_cents(2900),
            rating: 4.6,
            review_count: 87,
            sales_count: 3_405,
            creator_id: creator_id(3),
            images: vec!["https://images.unsplash.com/photo-1677442136019?w=800".to_string()],
            preview_url: "https://preview.digitalden.dev/chatgpt-prompts-mega".to_string(),
            featured: false,
            trending: true,
            created_at: timestamp(2024, 1, 22),
            updated_at: timestamp(2024, 5, 30),
        },
        Product {
            id: product_id(5),
            slug: "abstract-gradient-pack".to_string(),
            title: "Abstract Gradient Pack".to_string(),
            description: "60 high-resolution gradient backgrounds and mesh textures \
                          for hero sections, social posts, and slide decks. 6K PNG \
                          plus editable source files."
                .to_string(),
            short_description: "60 gradient backgrounds in 6K resolution.".to_string(),
            category: "graphics".to_string(),
            tags: vec![
                "gradients".to_string(),
                "backgrounds".to_string(),
                "textures".to_string(),
            ],
            price: Money::from_cents(1500),
            original_price: Money::from_cents(1500),
            rating: 4.7,
            review_count: 45,
            sales_count: 980,
            creator_id: creator_id(3),
            images: vec!["https://images.unsplash.com/photo-1557683316?w=800".to_string()],
            preview_url: "https://preview.digitalden.dev/abstract-gradient-pack".to_string(),
            featured: false,
            trending: false,
            created_at: timestamp(2024, 2, 10),
            updated_at: timestamp(2024, 2, 10),
        },
        Product {
            id: product_id(6),
            slug: "geometric-font-family".to_string(),
            title: "Geometric Font Family".to_string(),
            description: "A nine-weight geometric sans with italics, small caps, and \
                          extensive OpenType features. Desktop + web licenses \
                          included."
                .to_string(),
            short_description: "Nine-weight geometric sans, desktop + web.".to_string(),
            category: "fonts".to_string(),
            tags: vec![
                "typography".to_string(),
                "display".to_string(),
                "branding".to_string(),
            ],
            price: Money::from_cents(3500),
            original_price: Money::from_cents(4500),
            rating: 4.8,
            review_count: 62,
            sales_count: 1_150,
            creator_id: creator_id(4),
            images: vec!["https://images.unsplash.com/photo-1561070791?w=800".to_string()],
            preview_url: "https://preview.digitalden.dev/geometric-font-family".to_string(),
            featured: true,
            trending: false,
            created_at: timestamp(2023, 9, 4),
            updated_at: timestamp(2024, 4, 12),
        },
        Product {
            id: product_id(7),
            slug: "mobile-app-ui-template".to_string(),
            title: "Mobile App UI Template".to_string(),
            description: "iOS-first Figma template with 80 screens covering \
                          onboarding, commerce, and settings flows, wired up with \
                          prototype connections."
                .to_string(),
            short_description: "80-screen iOS Figma template.".to_string(),
            category: "ui-kits".to_string(),
            tags: vec![
                "figma".to_string(),
                "mobile".to_string(),
                "ios".to_string(),
            ],
            price: Money::from_cents(3900),
            original_price: Money::from_cents(3900),
            rating: 4.5,
            review_count: 38,
            sales_count: 760,
            creator_id: creator_id(1),
            images: vec!["https://images.unsplash.com/photo-1512941937669?w=800".to_string()],
            preview_url: "https://preview.digitalden.dev/mobile-app-ui-template".to_string(),
            featured: false,
            trending: true,
            created_at: timestamp(2024, 7, 20),
            updated_at: timestamp(2024, 7, 20),
        },
        Product {
            id: product_id(8),
            slug: "handcrafted-illustrations".to_string(),
            title: "Handcrafted Illustration Set".to_string(),
            description: "35 hand-drawn spot illustrations with transparent \
                          backgrounds, delivered as layered Procreate files and \
                          exported PNGs."
                .to_string(),
            short_description: "35 hand-drawn spot illustrations.".to_string(),
            category: "graphics".to_string(),
            tags: vec![
                "illustrations".to_string(),
                "png".to_string(),
                "procreate".to_string(),
            ],
            price: Money::from_cents(2900),
            original_price: Money::from_cents(3900),
            rating: 5.0,
            review_count: 19,
            sales_count: 410,
            creator_id: creator_id(4),
            images: vec!["https://images.unsplash.com/photo-1513364776144?w=800".to_string()],
            preview_url: "https://preview.digitalden.dev/handcrafted-illustrations".to_string(),
            featured: false,
            trending: false,
            created_at: timestamp(2024, 6, 2),
            updated_at: timestamp(2024, 6, 2),
        },
    ]
}

pub fn reviews() -> Vec<Review> {
    vec![
        Review {
            id: review_id(1),
            product_id: product_id(1),
            user_name: "Jennifer Walsh".to_string(),
            user_avatar: "https://images.unsplash.com/photo-1494790108755?w=150".to_string(),
            rating: 5,
            title: "Outstanding quality and documentation".to_string(),
            content: "This UI kit exceeded my expectations. The components are \
                      beautifully designed and the documentation is top-notch."
                .to_string(),
            date: date(2024, 7, 15),
            helpful: 23,
            verified: true,
        },
        Review {
            id: review_id(2),
            product_id: product_id(1),
            user_name: "Michael Rodriguez".to_string(),
            user_avatar: "https://images.unsplash.com/photo-1507003211169?w=150".to_string(),
            rating: 5,
            title: "Perfect for rapid prototyping".to_string(),
            content: "Clean, modern design with excellent Figma organization. The \
                      React components work flawlessly."
                .to_string(),
            date: date(2024, 7, 8),
            helpful: 18,
            verified: true,
        },
        Review {
            id: review_id(3),
            product_id: product_id(3),
            user_name: "Sarah Kim".to_string(),
            user_avatar: "https://images.unsplash.com/photo-1580489944761?w=150".to_string(),
            rating: 5,
            title: "Pixel-perfect icons".to_string(),
            content: "Amazing attention to detail. Every icon is perfectly crafted \
                      and consistent across all three styles."
                .to_string(),
            date: date(2024, 7, 12),
            helpful: 31,
            verified: true,
        },
        Review {
            id: review_id(4),
            product_id: product_id(4),
            user_name: "Alex Thompson".to_string(),
            user_avatar: "https://images.unsplash.com/photo-1472099645785?w=150".to_string(),
            rating: 4,
            title: "Great value for money".to_string(),
            content: "Comprehensive collection of prompts that actually work. Some \
                      categories are stronger than others."
                .to_string(),
            date: date(2024, 7, 5),
            helpful: 12,
            verified: true,
        },
        Review {
            id: review_id(5),
            product_id: product_id(2),
            user_name: "Lisa Chen".to_string(),
            user_avatar: "https://images.unsplash.com/photo-1438761681033?w=150".to_string(),
            rating: 5,
            title: "Saved our team weeks".to_string(),
            content: "We shipped an internal tool on top of this template in days. \
                      The TypeScript setup is clean and easy to extend."
                .to_string(),
            date: date(2024, 6, 28),
            helpful: 27,
            verified: true,
        },
        Review {
            id: review_id(6),
            product_id: product_id(6),
            user_name: "David Park".to_string(),
            user_avatar: "https://images.unsplash.com/photo-1500648767791?w=150".to_string(),
            rating: 4,
            title: "Beautiful face, slightly tight spacing".to_string(),
            content: "Gorgeous at display sizes. I adjusted tracking for body copy, \
                      but the weight range covers everything we need."
                .to_string(),
            date: date(2024, 5, 19),
            helpful: 9,
            verified: true,
        },
        Review {
            id: review_id(7),
            product_id: product_id(5),
            user_name: "Emma Novak".to_string(),
            user_avatar: "https://images.unsplash.com/photo-1544005313?w=150".to_string(),
            rating: 5,
            title: "Instant hero sections".to_string(),
            content: "Dropped these behind our landing page copy and they look \
                      fantastic. Resolution holds up on large displays."
                .to_string(),
            date: date(2024, 4, 2),
            helpful: 6,
            verified: false,
        },
        Review {
            id: review_id(8),
            product_id: product_id(7),
            user_name: "Tom Becker".to_string(),
            user_avatar: "https://images.unsplash.com/photo-1570295999919?w=150".to_string(),
            rating: 3,
            title: "Good screens, sparse documentation".to_string(),
            content: "The flows are well thought out but I had to reverse-engineer \
                      the component structure. Still worth the price."
                .to_string(),
            date: date(2024, 8, 1),
            helpful: 4,
            verified: true,
        },
    ]
}
