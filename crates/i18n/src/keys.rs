//! Translation keys and the per-locale string tables.
//!
//! Every key is declared once with its dotted name and one string per
//! locale. Leaving out a locale is a compile error.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::locale::Locale;

macro_rules! translations {
    ($( $(#[$meta:meta])* $variant:ident => $key:literal { en: $en:literal, am: $am:literal, } ),* $(,)?) => {
        /// A translation key
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Key {
            $( $(#[$meta])* $variant, )*
        }

        impl Key {
            /// Every key, in declaration order
            pub const ALL: &'static [Key] = &[$( Key::$variant, )*];

            /// The dotted key name, e.g. `dashboard.welcome`
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Key::$variant => $key, )*
                }
            }

            /// The template for this key in `locale`
            pub fn text(self, locale: Locale) -> &'static str {
                match locale {
                    Locale::En => match self {
                        $( Key::$variant => $en, )*
                    },
                    Locale::Am => match self {
                        $( Key::$variant => $am, )*
                    },
                }
            }
        }
    };
}

impl Key {
    /// Look up a key by its dotted name
    pub fn from_name(name: &str) -> Option<Key> {
        static INDEX: OnceLock<HashMap<&'static str, Key>> = OnceLock::new();
        INDEX
            .get_or_init(|| Key::ALL.iter().map(|key| (key.as_str(), *key)).collect())
            .get(name)
            .copied()
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

translations! {
    // Common
    Login => "login" {
        en: "Login",
        am: "ግባ",
    },
    Register => "register" {
        en: "Register",
        am: "ተመዝገብ",
    },
    Logout => "logout" {
        en: "Logout",
        am: "ውጣ",
    },
    Email => "email" {
        en: "Email",
        am: "ኢሜይል",
    },
    Password => "password" {
        en: "Password",
        am: "የይለፍ ቃል",
    },

    // Hero section
    HeroTitle => "hero.title" {
        en: "Fast and Reliable Delivery Tracking in Ethiopia",
        am: "በኢትዮጵያ ውስጥ ፈጣን እና አስተማማኝ የዕቃ ማድረሻ ክትትል",
    },
    HeroSubtitle => "hero.subtitle" {
        en: "MBet-Adera provides real-time tracking for your parcels across Ethiopia. Connect senders, receivers, and messengers in one seamless platform.",
        am: "ኤምቤት-አደራ በኢትዮጵያ ውስጥ ለእርስዎ ዕቃዎች በእውነተኛ ጊዜ ክትትል ያደርጋል። ላኪዎችን፣ ተቀባዮችን እና መልእክተኞችን በአንድ ቀልጣፋ መድረክ ያገናኛል።",
    },
    HeroGetStarted => "hero.getStarted" {
        en: "Get Started",
        am: "ጀምር",
    },
    HeroLearnMore => "hero.learnMore" {
        en: "Learn More",
        am: "ተጨማሪ ይወቁ",
    },

    // Features section
    FeaturesTitle => "features.title" {
        en: "Why Choose MBet-Adera",
        am: "ኤምቤት-አደራን ለምን መምረጥ አለብዎት",
    },
    FeaturesSubtitle => "features.subtitle" {
        en: "Our platform offers a comprehensive solution for all your delivery needs",
        am: "የእኛ መድረክ ለሁሉም የማድረሻ ፍላጎቶችዎ ሁሉን አቀፍ መፍትሄ ይሰጣል",
    },
    FeaturesRealTimeTitle => "features.realTime.title" {
        en: "Real-time Tracking",
        am: "በእውነተኛ ጊዜ ክትትል",
    },
    FeaturesRealTimeDescription => "features.realTime.description" {
        en: "Track your parcels in real-time with accurate GPS location updates",
        am: "ዕቃዎችዎን በእውነተኛ ጊዜ ከትክክለኛ የGPS ቦታ ዝመናዎች ጋር ይከታተሉ",
    },
    FeaturesTrackingTitle => "features.tracking.title" {
        en: "Route Optimization",
        am: "የመንገድ ማሻሻያ",
    },
    FeaturesTrackingDescription => "features.tracking.description" {
        en: "Efficient delivery routes to ensure your parcels arrive on time",
        am: "ዕቃዎችዎ በሰዓቱ እንዲደርሱ ውጤታማ የማድረሻ መንገዶች",
    },
    FeaturesChatTitle => "features.chat.title" {
        en: "In-app Chat",
        am: "በመተግበሪያ ውስጥ ቻት",
    },
    FeaturesChatDescription => "features.chat.description" {
        en: "Communicate directly with messengers, senders, and receivers",
        am: "ከመልእክተኞች፣ ላኪዎች እና ተቀባዮች ጋር በቀጥታ ይገናኙ",
    },
    FeaturesRatingTitle => "features.rating.title" {
        en: "Rating System",
        am: "የደረጃ አሰጣጥ ስርዓት",
    },
    FeaturesRatingDescription => "features.rating.description" {
        en: "Rate your experience to help us improve our service",
        am: "አገልግሎታችንን እንድናሻሽል ለመርዳት ልምድዎን ይደርጁ",
    },
    FeaturesSecureTitle => "features.secure.title" {
        en: "Secure Payments",
        am: "ደህንነቱ የተጠበቀ ክፍያዎች",
    },
    FeaturesSecureDescription => "features.secure.description" {
        en: "Integrated with Chapa for secure and reliable payments",
        am: "ለደህንነቱ የተጠበቀ እና አስተማማኝ ክፍያዎች ከቻፓ ጋር ተዋህዷል",
    },
    FeaturesMultilingualTitle => "features.multilingual.title" {
        en: "Multi-lingual Support",
        am: "ባለብዙ ቋንቋ ድጋፍ",
    },
    FeaturesMultilingualDescription => "features.multilingual.description" {
        en: "Use our platform in English or Amharic for your convenience",
        am: "መድረካችንን በእንግሊዝኛ ወይም በአማርኛ ለእርስዎ ምቾት ይጠቀሙ",
    },

    // How it works section
    HowItWorksTitle => "howItWorks.title" {
        en: "How It Works",
        am: "እንዴት እንደሚሰራ",
    },
    HowItWorksSubtitle => "howItWorks.subtitle" {
        en: "Simple steps to get your parcels delivered",
        am: "ዕቃዎችዎን ለማድረስ ቀላል ደረጃዎች",
    },
    HowItWorksStep1Title => "howItWorks.step1.title" {
        en: "Register",
        am: "ይመዝገቡ",
    },
    HowItWorksStep1Description => "howItWorks.step1.description" {
        en: "Create an account as a sender, receiver, pickup point, or messenger",
        am: "እንደ ላኪ፣ ተቀባይ፣ የመውሰጃ ቦታ ወይም መልእክተኛ መለያ ይፍጠሩ",
    },
    HowItWorksStep2Title => "howItWorks.step2.title" {
        en: "Create Order",
        am: "ትዕዛዝ ይፍጠሩ",
    },
    HowItWorksStep2Description => "howItWorks.step2.description" {
        en: "Specify pickup location, destination, and parcel details",
        am: "የመውሰጃ ቦታ፣ መድረሻ እና የዕቃ ዝርዝሮችን ይግለጹ",
    },
    HowItWorksStep3Title => "howItWorks.step3.title" {
        en: "Track Delivery",
        am: "ማድረስን ይከታተሉ",
    },
    HowItWorksStep3Description => "howItWorks.step3.description" {
        en: "Monitor your parcel's journey in real-time on the map",
        am: "የዕቃዎን ጉዞ በካርታው ላይ በእውነተኛ ጊዜ ይከታተሉ",
    },
    HowItWorksStep4Title => "howItWorks.step4.title" {
        en: "Receive Parcel",
        am: "ዕቃ ይቀበሉ",
    },
    HowItWorksStep4Description => "howItWorks.step4.description" {
        en: "Verify delivery with QR code and rate your experience",
        am: "ማድረስን በQR ኮድ ያረጋግጡ እና ልምድዎን ይደርጁ",
    },

    // CTA section
    CtaTitle => "cta.title" {
        en: "Ready to Get Started?",
        am: "ለመጀመር ዝግጁ ነዎት?",
    },
    CtaSubtitle => "cta.subtitle" {
        en: "Join thousands of users who trust MBet-Adera for their delivery needs",
        am: "ለማድረሻ ፍላጎታቸው ኤምቤት-አደራን የሚያምኑ ሺዎች ተጠቃሚዎችን ይቀላቀሉ",
    },
    CtaButton => "cta.button" {
        en: "Register Now",
        am: "አሁን ይመዝገቡ",
    },

    // Footer
    FooterDescription => "footer.description" {
        en: "Ethiopia's premier delivery tracking service",
        am: "የኢትዮጵያ ዋነኛ የዕቃ ማድረሻ ክትትል አገልግሎት",
    },
    FooterCompany => "footer.company" {
        en: "Company",
        am: "ኩባንያ",
    },
    FooterAbout => "footer.about" {
        en: "About Us",
        am: "ስለ እኛ",
    },
    FooterCareers => "footer.careers" {
        en: "Careers",
        am: "ሥራዎች",
    },
    FooterContact => "footer.contact" {
        en: "Contact",
        am: "ያግኙን",
    },
    FooterLegal => "footer.legal" {
        en: "Legal",
        am: "ሕጋዊ",
    },
    FooterTerms => "footer.terms" {
        en: "Terms of Service",
        am: "የአገልግሎት ውሎች",
    },
    FooterPrivacy => "footer.privacy" {
        en: "Privacy Policy",
        am: "የግላዊነት ፖሊሲ",
    },
    FooterCookies => "footer.cookies" {
        en: "Cookies Policy",
        am: "የኩኪዎች ፖሊሲ",
    },
    FooterConnect => "footer.connect" {
        en: "Connect",
        am: "ይገናኙ",
    },
    FooterRights => "footer.rights" {
        en: "All rights reserved",
        am: "መብቱ በህግ የተጠበቀ ነው",
    },

    // Login page
    LoginTitle => "login.title" {
        en: "Welcome Back",
        am: "እንኳን ደህና መጡ",
    },
    LoginSubtitle => "login.subtitle" {
        en: "Sign in to your MBet-Adera account",
        am: "ወደ ኤምቤት-አደራ መለያዎ ይግቡ",
    },
    LoginWelcomeBack => "login.welcomeBack" {
        en: "Welcome back",
        am: "እንኳን ደህና መጡ",
    },
    LoginEnterCredentials => "login.enterCredentials" {
        en: "Enter your credentials to access your account",
        am: "መለያዎን ለመድረስ ማረጋገጫዎችዎን ያስገቡ",
    },
    LoginEmailAddress => "login.emailAddress" {
        en: "Email address",
        am: "የኢሜይል አድራሻ",
    },
    LoginEmailPlaceholder => "login.emailPlaceholder" {
        en: "name@example.com",
        am: "name@example.com",
    },
    LoginPassword => "login.password" {
        en: "Password",
        am: "የይለፍ ቃል",
    },
    LoginPasswordPlaceholder => "login.passwordPlaceholder" {
        en: "••••••••",
        am: "••••••••",
    },
    LoginForgotPassword => "login.forgotPassword" {
        en: "Forgot password?",
        am: "የይለፍ ቃል ረሳኽ?",
    },
    LoginSignIn => "login.signIn" {
        en: "Sign In",
        am: "ግባ",
    },
    LoginDontHaveAccount => "login.dontHaveAccount" {
        en: "Don't have an account?",
        am: "መለያ የለዎትም?",
    },
    LoginRegister => "login.register" {
        en: "Register",
        am: "ይመዝገቡ",
    },
    LoginBackToHome => "login.backToHome" {
        en: "Back to home",
        am: "ወደ መነሻ ይመለሱ",
    },
    LoginGoogle => "login.google" {
        en: "Google",
        am: "ጉግል",
    },
    LoginContinueWithGoogle => "login.continueWithGoogle" {
        en: "Continue with Google",
        am: "በጉግል ይቀጥሉ",
    },
    LoginGoogleDescription => "login.googleDescription" {
        en: "We'll only use your email address to create your account",
        am: "መለያዎን ለመፍጠር የኢሜይል አድራሻዎን ብቻ እንጠቀማለን",
    },

    // Register page
    RegisterTitle => "register.title" {
        en: "Create an Account",
        am: "መለያ ይፍጠሩ",
    },
    RegisterSubtitle => "register.subtitle" {
        en: "Join MBet-Adera today",
        am: "ኤምቤት-አደራን ዛሬ ይቀላቀሉ",
    },
    RegisterCreateAccount => "register.createAccount" {
        en: "Create account",
        am: "መለያ ይፍጠሩ",
    },
    RegisterFillDetails => "register.fillDetails" {
        en: "Fill in your details to create your account",
        am: "መለያዎን ለመፍጠር ዝርዝሮችዎን ይሙሉ",
    },
    RegisterFullName => "register.fullName" {
        en: "Full name",
        am: "ሙሉ ስም",
    },
    RegisterFullNamePlaceholder => "register.fullNamePlaceholder" {
        en: "John Doe",
        am: "ጆን ዶ",
    },
    RegisterEmailAddress => "register.emailAddress" {
        en: "Email address",
        am: "የኢሜይል አድራሻ",
    },
    RegisterEmailPlaceholder => "register.emailPlaceholder" {
        en: "name@example.com",
        am: "name@example.com",
    },
    RegisterPhoneNumber => "register.phoneNumber" {
        en: "Phone number",
        am: "ስልክ ቁጥር",
    },
    RegisterPhonePlaceholder => "register.phonePlaceholder" {
        en: "+251 91 234 5678",
        am: "+251 91 234 5678",
    },
    RegisterPassword => "register.password" {
        en: "Password",
        am: "የይለፍ ቃል",
    },
    RegisterPasswordPlaceholder => "register.passwordPlaceholder" {
        en: "••••••••",
        am: "••••••••",
    },
    RegisterSelectRole => "register.selectRole" {
        en: "Select your role",
        am: "ሚናዎን ይምረጡ",
    },
    RegisterRolesSender => "register.roles.sender" {
        en: "Sender",
        am: "ላኪ",
    },
    RegisterRolesReceiver => "register.roles.receiver" {
        en: "Receiver",
        am: "ተቀባይ",
    },
    RegisterRolesPickup => "register.roles.pickup" {
        en: "Pickup Point",
        am: "የመውሰጃ ቦታ",
    },
    RegisterRolesMessenger => "register.roles.messenger" {
        en: "Messenger",
        am: "መልእክተኛ",
    },
    RegisterAlreadyHaveAccount => "register.alreadyHaveAccount" {
        en: "Already have an account?",
        am: "መለያ አለዎት?",
    },
    RegisterLogin => "register.login" {
        en: "Login",
        am: "ግባ",
    },
    RegisterBackToHome => "register.backToHome" {
        en: "Back to home",
        am: "ወደ መነሻ ይመለሱ",
    },
    RegisterEmail => "register.email" {
        en: "Email",
        am: "ኢሜይል",
    },
    RegisterGoogle => "register.google" {
        en: "Google",
        am: "ጉግል",
    },
    RegisterContinueWithGoogle => "register.continueWithGoogle" {
        en: "Continue with Google",
        am: "በጉግል ይቀጥሉ",
    },
    RegisterGoogleDescription => "register.googleDescription" {
        en: "We'll only use your email address to create your account",
        am: "መለያዎን ለመፍጠር የኢሜይል አድራሻዎን ብቻ እንጠቀማለን",
    },

    // Dashboard
    DashboardWelcome => "dashboard.welcome" {
        en: "Welcome, {name}",
        am: "እንኳን ደህና መጡ፣ {name}",
    },
    DashboardWelcomeMessage => "dashboard.welcomeMessage" {
        en: "Here's an overview of your delivery activities",
        am: "የእርስዎ የማድረሻ እንቅስቃሴዎች አጠቃላይ እይታ ይኸውልዎት",
    },
    DashboardCreateOrder => "dashboard.createOrder" {
        en: "Create Order",
        am: "ትዕዛዝ ይፍጠሩ",
    },
    DashboardTabsOverview => "dashboard.tabs.overview" {
        en: "Overview",
        am: "አጠቃላይ እይታ",
    },
    DashboardTabsOrders => "dashboard.tabs.orders" {
        en: "Orders",
        am: "ትዕዛዞች",
    },
    DashboardTabsMap => "dashboard.tabs.map" {
        en: "Map",
        am: "ካርታ",
    },
    DashboardStatsActiveOrders => "dashboard.stats.activeOrders" {
        en: "Active Orders",
        am: "ንቁ ትዕዛዞች",
    },
    DashboardStatsDeliveredOrders => "dashboard.stats.deliveredOrders" {
        en: "Delivered Orders",
        am: "የተላኩ ትዕዛዞች",
    },
    DashboardStatsRating => "dashboard.stats.rating" {
        en: "Your Rating",
        am: "የእርስዎ ደረጃ",
    },
    DashboardActiveOrders => "dashboard.activeOrders" {
        en: "Active Orders",
        am: "ንቁ ትዕዛዞች",
    },
    DashboardActiveOrdersDescription => "dashboard.activeOrdersDescription" {
        en: "Track your current deliveries",
        am: "የአሁኑን ማድረሻዎችዎን ይከታተሉ",
    },
    DashboardRecentActivity => "dashboard.recentActivity" {
        en: "Recent Activity",
        am: "የቅርብ ጊዜ እንቅስቃሴ",
    },
    DashboardRecentActivityDescription => "dashboard.recentActivityDescription" {
        en: "Latest updates on your orders",
        am: "በትዕዛዞችዎ ላይ የቅርብ ጊዜ ዝመናዎች",
    },
    DashboardAllOrders => "dashboard.allOrders" {
        en: "All Orders",
        am: "ሁሉም ትዕዛዞች",
    },
    DashboardAllOrdersDescription => "dashboard.allOrdersDescription" {
        en: "View and manage all your orders",
        am: "ሁሉንም ትዕዛዞችዎን ይመልከቱ እና ያስተዳድሩ",
    },
    DashboardLiveTracking => "dashboard.liveTracking" {
        en: "Live Tracking",
        am: "በቀጥታ ክትትል",
    },
    DashboardLiveTrackingDescription => "dashboard.liveTrackingDescription" {
        en: "Track all your active deliveries in real-time",
        am: "ሁሉንም ንቁ ማድረሻዎች በእውነተኛ ጊዜ ይከታተሉ",
    },
    DashboardActivityOrderDelivered => "dashboard.activity.orderDelivered" {
        en: "Your order #{id} has been delivered",
        am: "ትዕዛዝዎ #{id} ደርሷል",
    },
    DashboardActivityNewOrder => "dashboard.activity.newOrder" {
        en: "New order #{id} has been created",
        am: "አዲስ ትዕዛዝ #{id} ተፈጥሯል",
    },
    DashboardActivityOrderDelayed => "dashboard.activity.orderDelayed" {
        en: "Order #{id} is delayed by {minutes} minutes",
        am: "ትዕዛዝ #{id} በ{minutes} ደቂቃዎች ዘግይቷል",
    },
    DashboardActivityMessageReceived => "dashboard.activity.messageReceived" {
        en: "You received a message from {name}",
        am: "ከ{name} መልእክት ተቀብለዋል",
    },
    DashboardNavDashboard => "dashboard.nav.dashboard" {
        en: "Dashboard",
        am: "ዳሽቦርድ",
    },
    DashboardNavOrders => "dashboard.nav.orders" {
        en: "Orders",
        am: "ትዕዛዞች",
    },
    DashboardNavTracking => "dashboard.nav.tracking" {
        en: "Tracking",
        am: "ክትትል",
    },
    DashboardNavMessages => "dashboard.nav.messages" {
        en: "Messages",
        am: "መልእክቶች",
    },
    DashboardNavChatbot => "dashboard.nav.chatbot" {
        en: "AI Assistant",
        am: "AI ረዳት",
    },
    DashboardNavSettings => "dashboard.nav.settings" {
        en: "Settings",
        am: "ቅንብሮች",
    },
    DashboardNavHelp => "dashboard.nav.help" {
        en: "Help & Support",
        am: "እገዛ እና ድጋፍ",
    },
    DashboardNavLogout => "dashboard.nav.logout" {
        en: "Logout",
        am: "ውጣ",
    },
}
