use crate::model::{
    ChartSpec, DataPoint, Dataset, Document, Page, Person, Section, SectionBody, TableRow,
};

fn rows(pairs: &[(&str, &str)]) -> Vec<TableRow> {
    pairs
        .iter()
        .map(|&(key, value)| TableRow {
            key: key.to_string(),
            value: value.to_string(),
        })
        .collect()
}

fn clock_series(label: &str, color: &str, times: &[&str]) -> Dataset {
    Dataset {
        label: label.to_string(),
        color: color.to_string(),
        points: times
            .iter()
            .map(|t| DataPoint::TimeOfDay {
                time: t.to_string(),
            })
            .collect(),
    }
}

/// The fixed two-page document rendered when a payload has no page sequence.
pub fn sample_document() -> Document {
    let person = Person {
        name: Some("John Smith".into()),
        email: Some("john.smith@company.com".into()),
        phone: Some("+1 (555) 123-4567".into()),
        department: Some("Engineering".into()),
        position: Some("Senior Developer".into()),
        id: Some("EMP001".into()),
        start_date: Some("2022-01-15".into()),
        manager: Some("Sarah Johnson".into()),
    };

    let project = Section {
        title: "Project Information".into(),
        body: SectionBody::Table(rows(&[
            ("Project Name", "E-commerce Platform"),
            ("Status", "In Progress"),
            (
                "Description",
                "Building a scalable e-commerce platform with microservices architecture. \
                 This project involves multiple teams and requires coordination across \
                 frontend, backend, and DevOps teams.",
            ),
            ("Technologies", "Node.js, React, PostgreSQL, Docker, Kubernetes"),
            (
                "Timeline",
                "6 months development cycle with weekly sprints and continuous deployment",
            ),
        ])),
    };

    let chart = Section {
        title: "Performance Chart".into(),
        body: SectionBody::Chart(ChartSpec {
            title: "Daily Work Time Tracking".into(),
            datasets: vec![
                clock_series(
                    "Project Alpha",
                    "#3498db",
                    &[
                        "09:15", "09:45", "10:30", "11:15", "12:00", "13:30", "14:15", "15:00",
                        "15:45", "16:30", "17:15", "18:00",
                    ],
                ),
                clock_series(
                    "Project Beta",
                    "#e74c3c",
                    &[
                        "08:30", "09:00", "09:30", "10:45", "11:30", "12:45", "13:15", "14:00",
                        "14:45", "15:30", "16:15", "17:00",
                    ],
                ),
                clock_series(
                    "Code Reviews",
                    "#2ecc71",
                    &[
                        "10:00", "10:15", "11:00", "12:15", "13:00", "14:30", "15:15", "16:00",
                        "16:45", "17:30", "18:15", "19:00",
                    ],
                ),
            ],
            ..ChartSpec::default()
        }),
    };

    let skills = Section {
        title: "Skills & Experience".into(),
        body: SectionBody::Table(rows(&[
            ("Programming", "JavaScript, Python, Java, C++"),
            ("Frameworks", "React, Node.js, Express, Django"),
            ("Databases", "PostgreSQL, MongoDB, Redis"),
            ("Cloud", "AWS, Docker, Kubernetes"),
            (
                "Experience",
                "5+ years in full-stack development with expertise in building scalable web \
                 applications",
            ),
        ])),
    };

    Document {
        person,
        pages: vec![
            Page {
                sections: vec![project, chart],
            },
            Page {
                sections: vec![skills],
            },
        ],
    }
}
