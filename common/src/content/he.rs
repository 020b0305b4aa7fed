use super::*;

fn ask_email(name: &str) -> String {
    format!("נעים להכיר, {name}! מה המייל שלך כדי שאוכל לחזור אליך?")
}

pub static HE: Content = Content {
    nav: Nav {
        home: "בית",
        services: "שירותים",
        about: "אודות",
        portfolio: "תיק עבודות",
        guides: "מדריכים",
        contact: "צור קשר",
        tools: "כלים",
        language: "שפה",
        menu: "תפריט",
    },
    hero: Hero {
        headline_line1: "אני בונה את המערכות.",
        headline_line2: "אתה נהנה מהחופש.",
        subheadline: "אוטומציה עסקית חכמה שחוסכת לך זמן ומאפשרת לך להתמקד במה שבאמת חשוב.",
        cta_primary: "קבע פגישת ייעוץ חינם",
        cta_secondary: "למד עוד",
    },
    services: Services {
        title: "שירותים",
        subtitle: "איך אני יכול לעזור לעסק שלך",
        items: [
            ServiceItem {
                icon: "⚙️",
                title: "אוטומציה עסקית",
                description: "תהליכי אוטומציה מותאמים אישית באמצעות Make.com, n8n ופלטפורמות נוספות לייעול הפעילות שלך וחיסכון בשעות עבודה.",
                features: &["Make.com & n8n", "חיבור מערכות", "תהליכי עבודה אוטומטיים", "חיסכון בזמן"],
            },
            ServiceItem {
                icon: "🤖",
                title: "שילוב AI וסוכנים",
                description: "שילוב כלי AI כמו ChatGPT ו-Claude בתהליכי העבודה שלך. בניית סוכני AI מותאמים שעובדים בשבילך 24/7.",
                features: &["ChatGPT & Claude", "סוכני AI מותאמים", "צ'אטבוטים חכמים", "עיבוד מסמכים"],
            },
            ServiceItem {
                icon: "💬",
                title: "ייעוץ והדרכה",
                description: "הדרכה אישית שתעזור לך להבין הזדמנויות אוטומציה וליישם אותן בצורה אפקטיבית בעסק שלך.",
                features: &["ייעוץ אישי", "תכנון אסטרטגי", "הדרכה מעשית", "ליווי שוטף"],
            },
            ServiceItem {
                icon: "💻",
                title: "פיתוח אפליקציות ווב",
                description: "אפליקציות ווב מותאמות אישית בטכנולוגיות מודרניות. מכלים פשוטים ועד מערכות עסקיות מורכבות.",
                features: &["React & TypeScript", "אפליקציות ווב", "כלים פנימיים", "אינטגרציות API"],
            },
        ],
        cta: "צפה בכל השירותים",
        process_title: "איך זה עובד",
        process_subtitle: "תהליך פשוט ושקוף משיחת ההיכרות ועד מערכת שעובדת",
        steps: [
            ProcessStep { step: 1, title: "שיחת היכרות", desc: "נבין את הצרכים והאתגרים שלך" },
            ProcessStep { step: 2, title: "אפיון הפתרון", desc: "נבנה תוכנית עבודה מפורטת" },
            ProcessStep { step: 3, title: "פיתוח ובניה", desc: "נבנה את הפתרון בשלבים" },
            ProcessStep { step: 4, title: "הדרכה ותמיכה", desc: "נוודא שהכל עובד כמו שצריך" },
        ],
        ready: "מוכן להפוך את העסק שלך לאוטומטי?",
        ready_subtitle: "קבע פגישת ייעוץ חינם ובוא נמצא את השעות שתוכל להרוויח בחזרה כל שבוע.",
    },
    about: About {
        title: "אודות",
        subtitle: "היי, אני רועי",
        intro: "עם 18 שנות ניסיון בפיתוח תוכנה ויותר משנתיים של עבודה עם כלי AI, אני עוזר לבעלי עסקים לבצע אוטומציה של הפעילות שלהם ולעבוד חכם, לא קשה.",
        cta: "למד עוד עליי",
        story_title: "הסיפור שלי",
        story_p1: "במשך כמעט שני עשורים בניתי תוכנה והובלתי צוותי פיתוח, וראיתי אנשים מוכשרים מאבדים שעות כל שבוע על משימות חוזרות.",
        story_p2: "היום אני משלב את הניסיון הזה עם פלטפורמות אוטומציה מודרניות ו-AI כדי לבנות מערכות שעובדות בשקט ברקע, כך שבעלי עסקים יכולים להתמקד בלקוחות שלהם.",
        technologies: "טכנולוגיות שאני עובד איתן",
        skills: &[
            "React & TypeScript",
            "Node.js & Express",
            "Make.com & n8n",
            "ChatGPT & Claude API",
            "PostgreSQL",
            "תכנון מערכות",
        ],
        values_title: "הערכים שלי",
        values: [
            ValueItem {
                title: "פשטות",
                desc: "הפתרונות הטובים ביותר הם הפשוטים ביותר. אני מאמין בבניית מערכות שקל להבין ולתחזק.",
            },
            ValueItem {
                title: "שקיפות",
                desc: "תקשורת ברורה ופתוחה בכל שלב. בלי הפתעות, בלי עלויות נסתרות.",
            },
            ValueItem {
                title: "תוצאות",
                desc: "ההצלחה נמדדת בתוצאות. כל פרויקט מתמקד בערך אמיתי לעסק שלך.",
            },
        ],
        stats: [
            Stat { value: "18+", label: "שנות ניסיון בפיתוח" },
            Stat { value: "2+", label: "שנים עם כלי AI" },
            Stat { value: "50+", label: "פרויקטים מוצלחים" },
        ],
        lets_talk: "בוא נדבר",
    },
    portfolio: Portfolio {
        title: "תיק עבודות",
        subtitle: "פרויקטים אחרונים",
        view_project: "צפה בפרויקט",
        want_similar: "רוצה משהו דומה?",
        want_similar_subtitle: "ספר לי על העסק שלך ואראה לך מה אפשר להפוך לאוטומטי.",
        items: &[
            PortfolioItem {
                id: "1",
                emoji: "🛒",
                title: "אוטומציה של הזמנות בחנות אונליין",
                description: "מערכת אוטומטית לעיבוד הזמנות שחוסכת 10+ שעות בשבוע. הזמנות זורמות אוטומטית מ-Shopify למשלוח, עם עדכוני מלאי בזמן אמת והתראות ללקוחות.",
                result: "10+ שעות נחסכות בשבוע",
                technologies: &["Make.com", "Shopify", "Google Sheets", "Gmail"],
            },
            PortfolioItem {
                id: "2",
                emoji: "🤖",
                title: "בוט תמיכה מבוסס AI",
                description: "צ'אטבוט AI מותאם שמטפל ב-80% מפניות הלקוחות באופן אוטומטי. משולב עם WhatsApp Business לתקשורת חלקה עם לקוחות.",
                result: "80% מענה אוטומטי",
                technologies: &["ChatGPT API", "Node.js", "WhatsApp Business", "MongoDB"],
            },
            PortfolioItem {
                id: "3",
                emoji: "📊",
                title: "מערכת ניהול לידים",
                description: "מערכת אוטומטית לקליטת לידים, דירוג ומעקב. לידים ממקורות מרובים נאספים, מדורגים ומוקצים לאנשי מכירות באופן אוטומטי.",
                result: "תגובה מהירה פי 3",
                technologies: &["n8n", "Airtable", "Gmail", "Slack"],
            },
            PortfolioItem {
                id: "4",
                emoji: "📄",
                title: "מערכת עיבוד מסמכים",
                description: "עיבוד מסמכים מבוסס AI. חשבוניות, חוזים וטפסים נקראים אוטומטית, מקוטלגים ונשמרים במקומות הנכונים.",
                result: "95% דיוק",
                technologies: &["Claude API", "Make.com", "Google Drive", "Notion"],
            },
        ],
    },
    guides: Guides {
        title: "מדריכים",
        subtitle: "תובנות מעשיות על אוטומציה ו-AI",
        read_more: "קרא עוד",
        stay_updated: "הישאר מעודכן",
        stay_updated_subtitle: "קבל טיפים ותובנות על אוטומציה ו-AI ישירות לתיבת המייל שלך.",
        subscribe: "הרשמה",
        no_spam: "בלי ספאם. אפשר להסיר את ההרשמה בכל רגע.",
        email_placeholder: "הכנס את האימייל שלך",
        email_invalid: "יש להזין כתובת מייל תקינה",
        subscribed: "נרשמת בהצלחה. נתראה בקרוב!",
        subscribe_error: "ההרשמה נכשלה. אנא נסה שוב.",
        posts: &[
            GuidePost {
                id: "1",
                emoji: "⚙️",
                title: "5 סימנים שהעסק שלך צריך אוטומציה",
                excerpt: "גלה את המדדים המרכזיים שמצביעים על כך שהעסק שלך יכול להרוויח מאוטומציה. ממשימות חוזרות ועד אתגרי צמיחה.",
                date: "2025-12-01",
                read_time: "5 דקות קריאה",
                category: "אוטומציה",
            },
            GuidePost {
                id: "2",
                emoji: "📚",
                title: "מתחילים עם Make.com",
                excerpt: "מדריך למתחילים ליצירת תהליך האוטומציה הראשון שלך. הנחיות צעד אחר צעד לחיבור האפליקציות שלך וחיסכון בזמן.",
                date: "2025-11-15",
                read_time: "8 דקות קריאה",
                category: "מדריך",
            },
            GuidePost {
                id: "3",
                emoji: "🤖",
                title: "כלי AI לעסקים קטנים",
                excerpt: "כלי AI מעשיים שיכולים לעזור לעסק הקטן שלך להתחרות בשחקנים הגדולים. מצ'אטבוטים ועד יצירת תוכן.",
                date: "2025-11-01",
                read_time: "6 דקות קריאה",
                category: "בינה מלאכותית",
            },
            GuidePost {
                id: "4",
                emoji: "📧",
                title: "אוטומציה של תהליך המיילים שלך",
                excerpt: "למד איך לבצע אוטומציה של תגובות למיילים, מעקבים והתראות. חסוך שעות כל שבוע עם אוטומציה חכמה של מיילים.",
                date: "2025-10-20",
                read_time: "7 דקות קריאה",
                category: "אוטומציה",
            },
            GuidePost {
                id: "5",
                emoji: "💬",
                title: "למה כל עסק צריך צ'אטבוט",
                excerpt: "צ'אטבוטים כבר לא רק לחברות גדולות. גלה איך צ'אטבוט פשוט יכול לשנות את שירות הלקוחות שלך.",
                date: "2025-10-05",
                read_time: "4 דקות קריאה",
                category: "בינה מלאכותית",
            },
            GuidePost {
                id: "6",
                emoji: "📈",
                title: "ה-ROI של אוטומציה עסקית",
                excerpt: "איך לחשב את ההחזר על ההשקעה בפרויקטים של אוטומציה. מספרים אמיתיים וסיפורי הצלחה מעסקים קטנים.",
                date: "2025-09-20",
                read_time: "6 דקות קריאה",
                category: "עסקים",
            },
        ],
    },
    contact: Contact {
        title: "צור קשר",
        subtitle: "בוא נדבר על העסק שלך",
        connect_with: "בחר את הדרך המועדפת עליך ליצירת קשר",
        form_title: "שלח לנו הודעה",
        name_label: "השם שלך",
        name_placeholder: "איך קוראים לך?",
        name_required: "שם הוא שדה חובה",
        email_label: "האימייל שלך",
        email_placeholder: "your@email.com",
        email_required: "אימייל הוא שדה חובה",
        email_invalid: "כתובת אימייל לא תקינה",
        phone_label: "מספר הטלפון שלך",
        phone_placeholder: "501234567",
        phone_required: "טלפון הוא שדה חובה",
        phone_invalid: "יש להזין מספר טלפון תקין (לפחות 7 ספרות)",
        subject_label: "נושא (אופציונלי)",
        subject_placeholder: "על מה תרצה לדבר?",
        message_label: "ההודעה שלך",
        message_placeholder: "ספר לנו על הפרויקט שלך...",
        message_required: "הודעה היא שדה חובה",
        submit_button: "שלח הודעה",
        submitting: "שולח...",
        success: "תודה! אחזור אליך בקרוב.",
        error: "משהו השתבש. אנא נסה שוב.",
        coming_soon: "בקרוב",
    },
    footer: Footer {
        tagline: "עבוד חכם, לא קשה",
        quick_links: "קישורים מהירים",
        connect: "התחבר",
        rights: "כל הזכויות שמורות.",
    },
    common: Common {
        learn_more: "למד עוד",
        get_started: "התחל עכשיו",
        back_home: "חזרה לבית",
        loading: "טוען...",
    },
    not_found: NotFound {
        title: "הדף לא נמצא",
        message: "הדף שאתה מחפש לא קיים או הועבר.",
        cta: "חזור לדף הבית",
    },
    chatbot: Chatbot {
        greeting: "היי! 👋 אני כאן לעזור לך ללמוד עוד על אוטומציה לעסק שלך. מה השם שלך?",
        ask_email,
        ask_question: "מעולה! מה תרצה לדעת על אוטומציה עסקית?",
        complete: "תודה! קיבלתי את ההודעה שלך ואחזור אליך בקרוב. 🙌",
        placeholder_name: "הכנס את שמך...",
        placeholder_email: "הכנס את האימייל שלך...",
        placeholder_question: "כתוב את השאלה שלך...",
        assistant_name: "העוזר של רועי",
        usually_replies: "בדרך כלל עונה תוך יום",
        new_conversation: "התחל שיחה חדשה",
        open_label: "פתח צ'אט",
        close_label: "סגור צ'אט",
        send_label: "שלח",
    },
    tools: Tools {
        title: "כלים",
        subtitle: "כלים שימושיים ליצירת קישורים מוכנים לשליחה",
        all_tools: "כל הכלים",
        generated_link: "הקישור שנוצר:",
        copy_button: "העתק קישור",
        copied_button: "הועתק!",
        test_link: "בדוק קישור",
        generate_button: "צור קישור",
        email: EmailTool {
            title: "יוצר קישור מייל",
            subtitle: "צור קישור שפותח הודעת מייל חדשה עם תוכן מוכן",
            card_description: "צור קישור שפותח הודעת מייל חדשה עם נמען, נושא ותוכן מוכנים. תומך ב-Gmail, Outlook ותוכנות מייל.",
            card_cta: "צור קישור מייל",
            provider_label: "סוג הקישור",
            providers: EmailProviders {
                gmail: "Gmail (בדפדפן)",
                outlook: "Outlook (בדפדפן)",
                mailto: "תוכנת מייל (ברירת מחדל)",
            },
            provider_note: "Gmail ו-Outlook יפתחו בדפדפן. השולח יהיה מי שמחובר לחשבון.",
            to_label: "כתובת מייל של הנמען (אליו תישלח ההודעה)",
            to_placeholder: "example@email.com",
            to_required: "כתובת מייל היא שדה חובה",
            to_invalid: "כתובת מייל לא תקינה",
            subject_label: "נושא ההודעה",
            subject_placeholder: "נושא ההודעה",
            subject_required: "נושא הוא שדה חובה",
            body_label: "תוכן ההודעה",
            body_placeholder: "תוכן ההודעה...",
            body_required: "תוכן ההודעה הוא שדה חובה",
        },
        whatsapp: WhatsAppTool {
            title: "יוצר קישור וואטסאפ",
            subtitle: "צור קישור שפותח שיחת וואטסאפ עם הודעה מוכנה לשליחה",
            card_description: "צור קישור שפותח שיחת וואטסאפ עם מספר טלפון והודעה מוכנה לשליחה.",
            card_cta: "צור קישור וואטסאפ",
            phone_label: "מספר טלפון",
            phone_placeholder: "501234567",
            phone_error: "יש להזין מספר טלפון תקין (לפחות 7 ספרות)",
            message_label: "הודעה מוכנה (אופציונלי)",
            message_placeholder: "הודעה שתופיע בתיבת השליחה...",
        },
    },
    phone_input: PhoneInputText {
        search_placeholder: "חפש מדינה...",
        phone_placeholder: "מספר טלפון",
        no_results: "לא נמצאו תוצאות",
    },
    seo: Seo {
        title: "Royrai Automation - אוטומציה עסקית חכמה",
        description: "אני בונה את המערכות. אתה נהנה מהחופש. אוטומציה עסקית חכמה שחוסכת לך זמן ומאפשרת לך להתמקד במה שבאמת חשוב.",
    },
};
