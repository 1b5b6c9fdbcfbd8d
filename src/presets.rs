//! The two NextStep posters, as fixed content plus a theme each.

use crate::save::SaveLocations;
use placard_layout::{FooterContent, HeaderContent, ImageAttachment, SectionContent};
use placard_style::{
    ACCENT, BoxStyle, ColumnTheme, ColumnWidth, FooterTheme, HeaderLineTheme, HeaderTheme, LineStyles, Margins,
    SectionTheme, TextStyle, Theme,
};
use placard_types::{Color, Size};
use std::fmt;
use std::str::FromStr;

/// Both posters are drawn on a 48in x 36in landscape canvas.
pub const POSTER_CANVAS: Size = Size { width: 48.0, height: 36.0 };

const TITLE: &str = "NEXTSTEP: Swipe-Based Job Matching App";
const TEAM: &str = "Andrew Nguyen • Enrin Debbarma • Soleyana Abera • Bryan R Mathews";
const CONTACT: &str = "Contact: info@nextstep4.com | www.nextstep4.com | (123) 456-7890";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Preset {
    /// Capstone fair poster: 6in header, three fitted columns, 2in footer.
    Capstone,
    /// Showcase slide: 4in header, titled sections with images, 3in footer.
    #[default]
    Showcase,
}

/// Header, sections and footer of one poster.
#[derive(Debug, Clone, PartialEq)]
pub struct PosterContent {
    pub header: HeaderContent,
    pub sections: Vec<SectionContent>,
    pub footer: FooterContent,
}

impl Preset {
    pub fn all() -> [Preset; 2] {
        [Preset::Capstone, Preset::Showcase]
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Capstone => "capstone",
            Preset::Showcase => "showcase",
        }
    }

    pub fn canvas(self) -> Size {
        POSTER_CANVAS
    }

    /// Output file name without extension.
    pub fn file_stem(self) -> &'static str {
        match self {
            Preset::Capstone => "NextStep_Poster_Final",
            Preset::Showcase => "NextStep_Poster",
        }
    }

    /// Where the poster is saved by default, most preferred first.
    pub fn save_locations(self, extension: &str) -> SaveLocations {
        let file_name = format!("{}.{}", self.file_stem(), extension);
        match self {
            Preset::Capstone => SaveLocations::working_dir(&file_name),
            Preset::Showcase => SaveLocations::standard(&file_name),
        }
    }

    pub fn content(self) -> PosterContent {
        match self {
            Preset::Capstone => capstone_content(),
            Preset::Showcase => showcase_content(),
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            Preset::Capstone => capstone_theme(),
            Preset::Showcase => Theme::default(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::all()
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown preset '{}', expected capstone or showcase", s))
    }
}

fn capstone_theme() -> Theme {
    let white = Color::WHITE;
    Theme {
        header: HeaderTheme {
            height: 6.0,
            band: BoxStyle::filled(ACCENT),
            title: TextStyle::new(72.0, white).centered(),
            title_offset: 0.5,
            title_height: 1.5,
            lines: vec![
                HeaderLineTheme::new(2.0, 1.0, TextStyle::new(48.0, white).centered()),
                HeaderLineTheme::new(3.0, 1.0, TextStyle::new(32.0, white).centered()),
            ],
        },
        columns: ColumnTheme {
            width: ColumnWidth::Fixed(15.0),
            spacing: 1.0,
            margin: 0.5,
            header_gap: 1.0,
            footer_gap: 1.0,
        },
        section: SectionTheme {
            background: BoxStyle::outlined(white, Color::rgb(229, 231, 235)),
            title_bar: BoxStyle::none(),
            title_height: 1.0,
            title: TextStyle::new(36.0, ACCENT),
            content_insets: Margins::new(1.25, 0.25, 0.25, 0.25),
        },
        lines: LineStyles::uniform(TextStyle::new(24.0, Color::rgb(75, 85, 99))),
        footer: FooterTheme {
            height: 2.0,
            band: BoxStyle::filled(ACCENT),
            text: TextStyle::new(32.0, white).centered(),
        },
    }
}

fn capstone_content() -> PosterContent {
    PosterContent {
        header: HeaderContent::new(TITLE)
            .line("PENN STATE CAPSTONE 2025")
            .line(TEAM),
        sections: vec![
            SectionContent::new(
                "Abstract",
                [
                    "\nNextStep revolutionizes the job search experience by combining the intuitive simplicity of swipe-based interfaces with powerful AI-driven matching technology. Our platform addresses the fundamental challenges in today's job market by creating seamless connections between job seekers and employers.",
                    "\nOur AI-powered platform learns from each interaction, creating a dynamic matching system that gets smarter with every swipe. By analyzing user behavior, skills, and preferences, NextStep delivers precisely targeted job opportunities to candidates while providing employers with pre-qualified, interested applicants.",
                    "\nKey Innovation Points:",
                    "• AI-Powered Job Matching",
                    "• Intuitive Swipe Interface",
                    "• Real-time Application Tracking",
                    "• Secure Data Management",
                ],
            ),
            SectionContent::new(
                "System Architecture",
                [
                    "\nTechnology Stack:",
                    "\nFrontend:",
                    "• React.js (Web Application)",
                    "• React Native (Mobile Apps)",
                    "\nBackend:",
                    "• Node.js with Express.js",
                    "• Cloud-based MongoDB",
                    "\nExternal Services:",
                    "• Google OAuth Authentication",
                    "• Twilio Phone Verification",
                    "• Firebase Real-time Updates",
                ],
            ),
            SectionContent::new(
                "Security & Performance",
                [
                    "\nData Protection:",
                    "• End-to-end encryption",
                    "• GDPR compliance",
                    "• Regular security audits",
                    "• Secure data storage",
                    "\nSystem Performance:",
                    "• 100,000+ concurrent users",
                    "• 95% pages load < 2 seconds",
                    "• 99.9% uptime guarantee",
                    "• Mobile-optimized experience",
                ],
            ),
        ],
        footer: FooterContent::new(CONTACT),
    }
}

fn showcase_content() -> PosterContent {
    PosterContent {
        header: HeaderContent::new(TITLE)
            .line("Your next career move, simplified.")
            .line(TEAM)
            .line("Engineering: Computer Science Students"),
        sections: vec![
            SectionContent::new(
                "Purpose",
                [
                    "[INSERT ABOUT_NEXTSTEP.PNG IMAGE HERE]",
                    "",
                    "NextStep is designed to make job searching easier and more interactive. With a swipe-based interface, users can browse jobs effortlessly and apply with just one click.",
                    "",
                    "Key Features:",
                    "",
                    "• Swipe-based job browsing for an engaging experience",
                    "• AI-powered personalized job recommendations",
                    "• One-Click Apply for faster job applications",
                    "• Application tracking to manage job searches efficiently",
                ],
            )
            .with_image(ImageAttachment::new("about_nextstep.png", 1.0, 2.0)),
            SectionContent::new(
                "System Architecture",
                [
                    "Technology Stack:",
                    "",
                    "• Frontend: React.js & React Native",
                    "• Backend: Node.js with Express.js",
                    "• Database: Cloud-based MongoDB",
                    "• Authentication: Google OAuth",
                    "• Real-time Updates: Firebase",
                    "",
                    "[INSERT SIGNUP_SCREEN.PNG IMAGE HERE]",
                    "",
                    "User Authentication:",
                    "",
                    "• Secure phone verification via Twilio",
                    "• Email validation system",
                    "• Password encryption",
                    "• Role-based access control",
                ],
            )
            .with_image(ImageAttachment::new("signup_screen.png", 1.0, 10.0)),
            SectionContent::new(
                "Security & Optimization",
                [
                    "Data Privacy & Security:",
                    "",
                    "We take privacy seriously. Your data is securely stored and encrypted to ensure a safe job-hunting experience.",
                    "",
                    "• End-to-end encryption",
                    "• GDPR compliance",
                    "• Regular security audits",
                    "• Secure cloud storage",
                    "",
                    "Performance Optimization:",
                    "",
                    "NextStep helps users track and analyze job applications with built-in insights, so they can refine their job search strategy.",
                    "",
                    "• Real-time analytics",
                    "• Personalized insights",
                    "• Application success tracking",
                    "• Job market trends analysis",
                ],
            ),
        ],
        footer: FooterContent::new(CONTACT),
    }
}
