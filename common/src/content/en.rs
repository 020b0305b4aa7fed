use super::*;

fn ask_email(name: &str) -> String {
    format!("Nice to meet you, {name}! What's your email so I can get back to you?")
}

pub static EN: Content = Content {
    nav: Nav {
        home: "Home",
        services: "Services",
        about: "About",
        portfolio: "Portfolio",
        guides: "Guides",
        contact: "Contact",
        tools: "Tools",
        language: "Language",
        menu: "Menu",
    },
    hero: Hero {
        headline_line1: "I Build the Systems.",
        headline_line2: "You Enjoy the Freedom.",
        subheadline: "Smart business automation that saves you time and lets you focus on what really matters.",
        cta_primary: "Book a Free Consultation",
        cta_secondary: "Learn More",
    },
    services: Services {
        title: "Services",
        subtitle: "How I Can Help Your Business",
        items: [
            ServiceItem {
                icon: "⚙️",
                title: "Business Automation",
                description: "Custom automation workflows using Make.com, n8n, and other platforms to streamline your operations and save hours every week.",
                features: &["Make.com & n8n", "System integrations", "Automated workflows", "Time savings"],
            },
            ServiceItem {
                icon: "🤖",
                title: "AI Integration & Agents",
                description: "Integrate AI tools like ChatGPT and Claude into your workflows. Build custom AI agents that work for you 24/7.",
                features: &["ChatGPT & Claude", "Custom AI agents", "Smart chatbots", "Document processing"],
            },
            ServiceItem {
                icon: "💬",
                title: "Consulting & Mentoring",
                description: "One-on-one guidance to help you understand automation opportunities and implement them effectively in your business.",
                features: &["Personal consulting", "Strategic planning", "Hands-on training", "Ongoing support"],
            },
            ServiceItem {
                icon: "💻",
                title: "Web Application Development",
                description: "Custom web applications built with modern technologies. From simple tools to complex business systems.",
                features: &["React & TypeScript", "Web applications", "Internal tools", "API integrations"],
            },
        ],
        cta: "View All Services",
        process_title: "How It Works",
        process_subtitle: "A simple, transparent process from first call to a working system",
        steps: [
            ProcessStep { step: 1, title: "Discovery Call", desc: "Understanding your needs and challenges" },
            ProcessStep { step: 2, title: "Solution Design", desc: "Creating a detailed action plan" },
            ProcessStep { step: 3, title: "Build & Deliver", desc: "Building the solution in phases" },
            ProcessStep { step: 4, title: "Training & Support", desc: "Making sure everything works perfectly" },
        ],
        ready: "Ready to Automate Your Business?",
        ready_subtitle: "Book a free consultation and let's find the hours you can get back every week.",
    },
    about: About {
        title: "About Me",
        subtitle: "Hi, I'm Roy",
        intro: "With 18 years of software development experience and 2+ years working with AI tools, I help business owners automate their operations and work smarter, not harder.",
        cta: "Learn More About Me",
        story_title: "My Story",
        story_p1: "I spent nearly two decades building software and leading development teams, watching talented people lose hours every week to repetitive tasks.",
        story_p2: "Today I combine that experience with modern automation platforms and AI to build systems that run quietly in the background, so business owners can focus on their clients.",
        technologies: "Technologies I Work With",
        skills: &[
            "React & TypeScript",
            "Node.js & Express",
            "Make.com & n8n",
            "ChatGPT & Claude API",
            "PostgreSQL",
            "System Design",
        ],
        values_title: "My Values",
        values: [
            ValueItem {
                title: "Simplicity",
                desc: "The best solutions are the simplest ones. I believe in building systems that are easy to understand and maintain.",
            },
            ValueItem {
                title: "Transparency",
                desc: "Clear and open communication at every step. No surprises, no hidden costs.",
            },
            ValueItem {
                title: "Results",
                desc: "Success is measured by results. Every project focuses on real value for your business.",
            },
        ],
        stats: [
            Stat { value: "18+", label: "Years in Development" },
            Stat { value: "2+", label: "Years with AI Tools" },
            Stat { value: "50+", label: "Successful Projects" },
        ],
        lets_talk: "Let's Talk",
    },
    portfolio: Portfolio {
        title: "Portfolio",
        subtitle: "Recent Projects",
        view_project: "View Project",
        want_similar: "Want Something Similar?",
        want_similar_subtitle: "Tell me about your business and I'll show you what can be automated.",
        items: &[
            PortfolioItem {
                id: "1",
                emoji: "🛒",
                title: "E-commerce Order Automation",
                description: "Automated order processing system that saves 10+ hours per week. Orders flow automatically from Shopify to fulfillment, with real-time inventory updates and customer notifications.",
                result: "10+ hours saved weekly",
                technologies: &["Make.com", "Shopify", "Google Sheets", "Gmail"],
            },
            PortfolioItem {
                id: "2",
                emoji: "🤖",
                title: "AI Customer Support Bot",
                description: "Custom AI chatbot handling 80% of customer inquiries automatically. Integrated with WhatsApp Business for seamless customer communication.",
                result: "80% automated responses",
                technologies: &["ChatGPT API", "Node.js", "WhatsApp Business", "MongoDB"],
            },
            PortfolioItem {
                id: "3",
                emoji: "📊",
                title: "Lead Management System",
                description: "Automated lead capture, scoring, and follow-up system. Leads from multiple sources are collected, scored, and assigned to sales team members automatically.",
                result: "3x faster lead response",
                technologies: &["n8n", "Airtable", "Gmail", "Slack"],
            },
            PortfolioItem {
                id: "4",
                emoji: "📄",
                title: "Document Processing Pipeline",
                description: "AI-powered document extraction and processing. Invoices, contracts, and forms are automatically parsed, categorized, and stored in the right places.",
                result: "95% accuracy rate",
                technologies: &["Claude API", "Make.com", "Google Drive", "Notion"],
            },
        ],
    },
    guides: Guides {
        title: "Guides",
        subtitle: "Practical insights on automation and AI",
        read_more: "Read More",
        stay_updated: "Stay Updated",
        stay_updated_subtitle: "Get tips and insights about automation and AI directly to your inbox.",
        subscribe: "Subscribe",
        no_spam: "No spam. Unsubscribe anytime.",
        email_placeholder: "Enter your email",
        email_invalid: "Please enter a valid email address",
        subscribed: "You're subscribed. Talk soon!",
        subscribe_error: "Subscription failed. Please try again.",
        posts: &[
            GuidePost {
                id: "1",
                emoji: "⚙️",
                title: "5 Signs Your Business Needs Automation",
                excerpt: "Discover the key indicators that suggest your business could benefit from automation. From repetitive tasks to scaling challenges, learn when it's time to automate.",
                date: "2025-12-01",
                read_time: "5 min read",
                category: "Automation",
            },
            GuidePost {
                id: "2",
                emoji: "📚",
                title: "Getting Started with Make.com",
                excerpt: "A beginner-friendly guide to creating your first automation workflow. Step-by-step instructions to connect your apps and save time.",
                date: "2025-11-15",
                read_time: "8 min read",
                category: "Tutorial",
            },
            GuidePost {
                id: "3",
                emoji: "🤖",
                title: "AI Tools for Small Business",
                excerpt: "Practical AI tools that can help your small business compete with the big players. From chatbots to content generation.",
                date: "2025-11-01",
                read_time: "6 min read",
                category: "AI",
            },
            GuidePost {
                id: "4",
                emoji: "📧",
                title: "Automating Your Email Workflow",
                excerpt: "Learn how to automate email responses, follow-ups, and notifications. Save hours every week with smart email automation.",
                date: "2025-10-20",
                read_time: "7 min read",
                category: "Automation",
            },
            GuidePost {
                id: "5",
                emoji: "💬",
                title: "Why Every Business Needs a Chatbot",
                excerpt: "Chatbots aren't just for big companies anymore. Discover how a simple chatbot can transform your customer service.",
                date: "2025-10-05",
                read_time: "4 min read",
                category: "AI",
            },
            GuidePost {
                id: "6",
                emoji: "📈",
                title: "The ROI of Business Automation",
                excerpt: "How to calculate the return on investment for automation projects. Real numbers and case studies from small businesses.",
                date: "2025-09-20",
                read_time: "6 min read",
                category: "Business",
            },
        ],
    },
    contact: Contact {
        title: "Contact Us",
        subtitle: "Let's Talk About Your Business",
        connect_with: "Choose your preferred way to reach us",
        form_title: "Send us a message",
        name_label: "Your name",
        name_placeholder: "What is your name?",
        name_required: "Name is required",
        email_label: "Your email",
        email_placeholder: "your@email.com",
        email_required: "Email is required",
        email_invalid: "Invalid email",
        phone_label: "Your phone number",
        phone_placeholder: "501234567",
        phone_required: "Phone is required",
        phone_invalid: "Please enter a valid phone number (at least 7 digits)",
        subject_label: "Subject (optional)",
        subject_placeholder: "What would you like to discuss?",
        message_label: "Your message",
        message_placeholder: "Tell us about your project...",
        message_required: "Message is required",
        submit_button: "Send Message",
        submitting: "Sending...",
        success: "Thank you! I'll get back to you soon.",
        error: "Something went wrong. Please try again.",
        coming_soon: "Coming soon",
    },
    footer: Footer {
        tagline: "Work Smart, Not Hard",
        quick_links: "Quick Links",
        connect: "Connect",
        rights: "All rights reserved.",
    },
    common: Common {
        learn_more: "Learn More",
        get_started: "Get Started",
        back_home: "Back to Home",
        loading: "Loading...",
    },
    not_found: NotFound {
        title: "Page Not Found",
        message: "The page you're looking for doesn't exist or has been moved.",
        cta: "Go Back Home",
    },
    chatbot: Chatbot {
        greeting: "Hi! 👋 I'm here to help you learn more about automation for your business. What's your name?",
        ask_email,
        ask_question: "Great! What would you like to know about business automation?",
        complete: "Thank you! I've received your message and will get back to you soon. 🙌",
        placeholder_name: "Enter your name...",
        placeholder_email: "Enter your email...",
        placeholder_question: "Type your question...",
        assistant_name: "Roy's Assistant",
        usually_replies: "Usually replies within a day",
        new_conversation: "Start a new conversation",
        open_label: "Open chat",
        close_label: "Close chat",
        send_label: "Send",
    },
    tools: Tools {
        title: "Tools",
        subtitle: "Useful tools for creating ready-to-send links",
        all_tools: "All tools",
        generated_link: "Generated link:",
        copy_button: "Copy Link",
        copied_button: "Copied!",
        test_link: "Test Link",
        generate_button: "Generate Link",
        email: EmailTool {
            title: "Email Link Generator",
            subtitle: "Create a link that opens a new email with pre-filled content",
            card_description: "Create a link that opens a new email with pre-filled recipient, subject, and body. Supports Gmail, Outlook, and email apps.",
            card_cta: "Create Email Link",
            provider_label: "Link type",
            providers: EmailProviders {
                gmail: "Gmail (in browser)",
                outlook: "Outlook (in browser)",
                mailto: "Email app (default)",
            },
            provider_note: "Gmail and Outlook will open in browser. Sender will be whoever is logged in.",
            to_label: "Recipient email address (who will receive the email)",
            to_placeholder: "example@email.com",
            to_required: "Email address is required",
            to_invalid: "Invalid email address",
            subject_label: "Email subject",
            subject_placeholder: "Message subject",
            subject_required: "Subject is required",
            body_label: "Email body",
            body_placeholder: "Message content...",
            body_required: "Message body is required",
        },
        whatsapp: WhatsAppTool {
            title: "WhatsApp Link Generator",
            subtitle: "Create a link that opens a WhatsApp chat with a pre-filled message",
            card_description: "Create a link that opens a WhatsApp chat with a phone number and pre-filled message.",
            card_cta: "Create WhatsApp Link",
            phone_label: "Phone number",
            phone_placeholder: "501234567",
            phone_error: "Please enter a valid phone number (at least 7 digits)",
            message_label: "Pre-filled message (optional)",
            message_placeholder: "Message that will appear in the chat box...",
        },
    },
    phone_input: PhoneInputText {
        search_placeholder: "Search country...",
        phone_placeholder: "Phone number",
        no_results: "No results found",
    },
    seo: Seo {
        title: "Royrai Automation - Smart Business Automation",
        description: "I build the systems. You enjoy the freedom. Smart business automation that saves you time and lets you focus on what really matters.",
    },
};
