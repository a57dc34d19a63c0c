// Static site content: navigation, tracks, timeline, guidelines, contact.
//
// Everything here is plain `'static` data. Problem statements carry their
// extra attributes as labeled pairs so the markup layer can render them
// uniformly instead of special-casing each track.

pub const BRAND: &str = "SPS CUP 2025";
pub const SITE_TITLE: &str = "Signal Processing Cup Challenge";
pub const SITE_SUBTITLE: &str = "A National-Level Innovation Challenge";
pub const ORGANIZERS: &str = "IEEE Madras Section & SSN College of Engineering, Chennai";

pub const REGISTRATION_DATES: &str = "16-25 September 2025";
pub const GRAND_DEMO_DATES: &str = "16-17 October 2025";

/// 2025-09-16T00:00:00Z, the instant registration opens.
pub const REGISTRATION_OPENS_MS: f64 = 1_757_980_800_000.0;
pub const REGISTRATION_OPEN_TEXT: &str = "Registration is now open!";

#[derive(Clone, Copy, Debug)]
pub struct NavPage {
    pub id: &'static str,
    pub title: &'static str,
}

pub static NAV_PAGES: &[NavPage] = &[
    NavPage { id: "home", title: "Home" },
    NavPage { id: "overview", title: "Overview" },
    NavPage { id: "tracks", title: "Tracks" },
    NavPage { id: "timeline", title: "Timeline" },
    NavPage { id: "guidelines", title: "Guidelines" },
    NavPage { id: "contact", title: "Contact" },
];

pub static HOME_HIGHLIGHTS: &[&str] = &[
    "5 Challenging Tracks",
    "National Level Competition",
    "Cash Prizes & Certificates",
    "Industry Expert Judges",
];

#[derive(Clone, Copy, Debug)]
pub struct Problem {
    pub title: &'static str,
    pub description: &'static str,
    /// Labeled attributes rendered as "LABEL: value" lines.
    pub details: &'static [(&'static str, &'static str)],
}

#[derive(Clone, Copy, Debug)]
pub struct Track {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub problems: &'static [Problem],
}

pub static TRACKS: &[Track] = &[
    Track {
        id: "bci",
        title: "Biomedical Signal Processing",
        subtitle: "Brain-Computer Interface (BCI)",
        color: "#0066ff",
        icon: "\u{1F9E0}",
        description: "Develop cutting-edge brain-computer interfaces using EEG signal processing",
        problems: &[
            Problem {
                title: "Motor Imagery EEG Control",
                description: "Design a system that decodes motor imagery from EEG signals to allow hands-free control interfaces. Build a signal processing pipeline that classifies multi-channel EEG data based on imagined limb movements, such as left hand versus right hand.",
                details: &[
                    ("Techniques", "CSP (Common Spatial Patterns), Wavelet Transforms, SVM, CNN"),
                    ("Bonus", "Real-time implementation or virtual interface integration"),
                ],
            },
            Problem {
                title: "Emotional State Recognition",
                description: "Develop a model that identifies emotional states using EEG signals to support mental health monitoring and user interfaces that adjust to needs. Create a system that processes EEG data to classify emotional states, including happiness, stress, or calmness.",
                details: &[
                    ("Datasets", "DEAP, DREAMER"),
                    ("Techniques", "Frequency band analysis, Entropy measures, Machine learning classifiers"),
                    ("Focus", "Interpretable and reliable results across subjects"),
                ],
            },
            Problem {
                title: "Cognitive Workload Estimation",
                description: "Estimate cognitive workload from EEG signals to improve human-computer interaction and learning systems. Design a pipeline that analyzes EEG recordings to measure cognitive load during tasks, such as problem-solving or multitasking.",
                details: &[
                    ("Features", "Theta/beta ratio, Spectral power, Real-time feedback"),
                    ("Applications", "Adaptive systems, Learning optimization"),
                ],
            },
        ],
    },
    Track {
        id: "wireless",
        title: "Wireless Sensing",
        subtitle: "Wi-Fi Vision",
        color: "#00bcd4",
        icon: "\u{1F4E1}",
        description: "Harness Wi-Fi signals for device-free sensing and activity recognition",
        problems: &[
            Problem {
                title: "Device-Free Activity Recognition",
                description: "Use Channel State Information (CSI) extracted from standard Wi-Fi packets to detect and classify human activities in a room (e.g., walking, sitting, waving) without using cameras or wearables.",
                details: &[
                    ("Technology", "Wi-Fi CSI analysis"),
                    ("Activities", "Walking, Sitting, Waving, Gestures"),
                    ("Advantage", "Privacy-preserving sensing without cameras or wearables"),
                ],
            },
        ],
    },
    Track {
        id: "environmental",
        title: "Environmental & Geospatial",
        subtitle: "Signal Processing",
        color: "#4caf50",
        icon: "\u{1F30D}",
        description: "Apply signal processing to environmental monitoring and geospatial analysis",
        problems: &[
            Problem {
                title: "Seismic Event Classifier",
                description: "Identify earthquakes by clear P and S arrivals, emergent onset, long coda, and strong low-frequency surface waves. Detect explosions through impulsive P waves, weak or absent S waves, short duration, and high-frequency content.",
                details: &[
                    ("Events", "Earthquakes, Explosions, Urban noise"),
                    ("Features", "P/S wave analysis, Frequency content, Signal duration"),
                ],
            },
            Problem {
                title: "Acoustic Source Localization",
                description: "Set up an array of microphones at precisely known positions in the environment. Record the sound signal as it reaches each microphone. Calculate the Time Difference of Arrival (TDOA) of the sound between microphones.",
                details: &[
                    ("Method", "TDOA-based triangulation"),
                    ("Setup", "Microphone array with known positions"),
                    ("Output", "Precise source location coordinates"),
                ],
            },
            Problem {
                title: "Deforestation Detector with Radar Imagery",
                description: "Collect time-series Synthetic Aperture Radar (SAR) satellite images of the target region. Preprocess the imagery to remove noise and align datasets. Compare images across different time intervals to identify significant changes.",
                details: &[
                    ("Data", "SAR satellite imagery"),
                    ("Analysis", "Time-series change detection"),
                    ("Output", "Deforestation mapping and monitoring"),
                ],
            },
        ],
    },
    Track {
        id: "ev",
        title: "Electronic Vehicles",
        subtitle: "Signal Processing",
        color: "#ff9800",
        icon: "\u{26A1}",
        description: "Develop signal processing solutions for electric vehicle monitoring and diagnostics",
        problems: &[
            Problem {
                title: "Inverter Fault Detection",
                description: "Build a system that detects inverter faults in EVs by analyzing current and voltage waveforms. The pipeline should include preprocessing signals with filtering and denoising methods and extracting features using FFT, Wavelet Transform, and time-frequency analysis.",
                details: &[
                    ("Signals", "Current waveforms, Voltage patterns"),
                    ("Techniques", "FFT, Wavelet Transform, Time-frequency analysis"),
                    ("Faults", "Harmonic distortions, Short circuits, Switching faults"),
                    ("Integration", "Vehicle control units and cloud dashboards"),
                ],
            },
            Problem {
                title: "Electric Motor Condition Monitoring",
                description: "Develop a signal processing pipeline that continuously checks EV motor health using stator current, vibration, and sound emission signals. Use Envelope Detection, Hilbert-Huang Transform, and Spectrogram analysis.",
                details: &[
                    ("Signals", "Stator current, Vibration, Sound emission"),
                    ("Techniques", "Envelope Detection, Hilbert-Huang Transform, Spectrogram analysis"),
                    ("Faults", "Bearing wear, Rotor misalignment, Insulation breakdown"),
                    ("AI models", "SVM, CNN"),
                ],
            },
            Problem {
                title: "Road Condition Classification",
                description: "Develop a road-condition classification system for EVs using vibration signal processing. Acquire vibration signals from accelerometers attached to the suspension and chassis using time-frequency analysis.",
                details: &[
                    ("Sensors", "Accelerometers on suspension and chassis"),
                    ("Analysis", "STFT, Wavelet Transforms"),
                    ("Conditions", "Smooth, Rough, Potholes, Wet, Gravel"),
                    ("Applications", "Adaptive suspension, Safety features, Route optimization"),
                ],
            },
        ],
    },
    Track {
        id: "innovation",
        title: "Student Innovation",
        subtitle: "Open Track",
        color: "#9c27b0",
        icon: "\u{1F4A1}",
        description: "Propose your own innovative signal processing solution",
        problems: &[
            Problem {
                title: "Open Innovation Track",
                description: "Propose your own innovative signal processing solution to address real-world challenges. This track encourages creative thinking and novel applications of signal processing techniques across any domain.",
                details: &[
                    ("Scope", "Any signal processing application"),
                    ("Focus", "Innovation and real-world impact"),
                    ("Domains", "Healthcare, Smart cities, Agriculture, Security, Communication"),
                    ("Evaluation", "Novelty, feasibility, and societal impact"),
                ],
            },
        ],
    },
];

#[derive(Clone, Copy, Debug)]
pub struct DemoRound {
    pub round: &'static str,
    pub time: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct TimelinePhase {
    pub phase: &'static str,
    pub dates: &'static str,
    pub description: &'static str,
    pub location: Option<&'static str>,
    pub tasks: &'static [&'static str],
    pub evaluation: &'static [&'static str],
    pub rounds: &'static [DemoRound],
}

pub static TIMELINE_PHASES: &[TimelinePhase] = &[
    TimelinePhase {
        phase: "Registration",
        dates: REGISTRATION_DATES,
        description: "Team registration opens",
        location: None,
        tasks: &[
            "Form teams of 3-4 members",
            "Select competition track",
            "Submit team details",
        ],
        evaluation: &[],
        rounds: &[],
    },
    TimelinePhase {
        phase: "Round 1: Idea Submission",
        dates: "September 2025",
        description: "Online presentation submission",
        location: None,
        tasks: &[],
        evaluation: &["Novelty", "Feasibility", "Cost-effectiveness", "Scalability"],
        rounds: &[],
    },
    TimelinePhase {
        phase: "Grand Demo Day",
        dates: GRAND_DEMO_DATES,
        description: "Offline final round for top 10 teams",
        location: Some("SSN College of Engineering"),
        tasks: &[],
        evaluation: &[],
        rounds: &[
            DemoRound {
                round: "Setup & Evaluation",
                time: "Until 4PM Day 1",
                description: "Implementation and setup with expert suggestions",
            },
            DemoRound {
                round: "Implementation Review",
                time: "1PM Day 2",
                description: "Assessment of implemented changes and suggestions",
            },
            DemoRound {
                round: "Final Presentation",
                time: "9AM Day 2",
                description: "Final review by External Jury",
            },
        ],
    },
];

#[derive(Clone, Copy, Debug)]
pub struct GuidelineSection {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub static GUIDELINE_SECTIONS: &[GuidelineSection] = &[
    GuidelineSection {
        title: "Team Formation",
        items: &[
            "Each team must have 3 to 4 members",
            "Team members can be from different academic backgrounds",
            "Each team selects one track to compete in",
        ],
    },
    GuidelineSection {
        title: "Evaluation Criteria",
        items: &[
            "Novelty and originality of the proposed solution",
            "Complexity and depth of technical approach",
            "Clarity, structure, and details in submission format",
            "Feasibility of implementation with available resources",
            "Sustainability of the solution over time",
            "Scalability of the solution",
        ],
    },
    GuidelineSection {
        title: "General Rules",
        items: &[
            "Projects must be developed during the hackathon period",
            "Use of open-source or existing code must be declared",
            "All team members must be present for evaluations",
            "Plagiarism will lead to disqualification",
            "Respect deadlines and conduct - violations result in penalties",
        ],
    },
    GuidelineSection {
        title: "Expected Outcomes",
        items: &[
            "Encourages innovation and problem-solving culture among students",
            "Provides hands-on learning experience in applying theoretical concepts",
            "Strengthens teamwork, leadership, and collaboration skills",
            "Builds exposure to real-world industry problems and research trends",
            "Enhances presentation, communication, and pitching abilities",
            "Offers networking opportunities with peers, mentors, and professionals",
            "Inspires participants to pursue research, startups, or career paths",
            "Contributes to creating a community of innovators for global challenges",
        ],
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Award {
    pub title: &'static str,
    pub description: &'static str,
    pub prize: &'static str,
}

pub static AWARDS: &[Award] = &[
    Award {
        title: "Track Winners",
        description: "Top 2 teams from each track",
        prize: "Cash prizes and certificates",
    },
    Award {
        title: "Participation Recognition",
        description: "All shortlisted final round teams",
        prize: "Participation certificates",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct ContactCard {
    pub title: &'static str,
    pub items: &'static [(&'static str, &'static str)],
}

pub static CONTACT_CARDS: &[ContactCard] = &[
    ContactCard {
        title: "Registration Information",
        items: &[
            ("Registration Period", REGISTRATION_DATES),
            ("Process", "Online registration through official portal"),
            ("Eligibility", "Students, researchers, and professionals in engineering, computer science, and related fields"),
        ],
    },
    ContactCard {
        title: "Grand Demo Venue",
        items: &[
            ("Venue", "Sri Sivasubramaniya Nadar College of Engineering"),
            ("Dates", GRAND_DEMO_DATES),
            ("Format", "In-person final presentations and demonstrations"),
        ],
    },
    ContactCard {
        title: "Organizers",
        items: &[
            ("Primary Organizer", "IEEE Madras Section"),
            ("Host Institution", "SSN College of Engineering, Chennai"),
        ],
    },
];

pub fn track_by_id(id: &str) -> Option<&'static Track> {
    TRACKS.iter().find(|t| t.id == id)
}

/// Parse a `#rrggbb` color (leading `#` optional).
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
