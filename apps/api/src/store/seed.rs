use chrono::NaiveDate;

use crate::models::{Job, Portfolio, Role, User};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The four postings the board starts with. `employer2` is not a registered user.
pub fn initial_jobs() -> Vec<Job> {
    vec![
        Job {
            id: "job1".into(),
            title: "Senior Frontend Developer".into(),
            company: "Tech Solutions Inc.".into(),
            location: "Remote".into(),
            description: "We are looking for a highly skilled Senior Frontend Developer to join our dynamic team. You will be responsible for leading the development of our user-facing applications using React and TypeScript.".into(),
            requirements: strings(&[
                "5+ years React experience",
                "JavaScript, TypeScript, HTML, CSS",
                "State management (Redux/Zustand)",
                "API integration",
                "Unit testing",
            ]),
            salary: "$120,000 - $150,000".into(),
            posted_date: date(2024, 6, 15),
            employer_id: "employer1".into(),
        },
        Job {
            id: "job2".into(),
            title: "Backend Engineer (Node.js)".into(),
            company: "DataCorp LLC".into(),
            location: "New York, NY".into(),
            description: "Join our backend team to build scalable and robust APIs using Node.js and Express. Experience with MongoDB or PostgreSQL is a plus.".into(),
            requirements: strings(&[
                "3+ years Node.js experience",
                "Express.js",
                "RESTful API design",
                "Database knowledge (SQL/NoSQL)",
                "Version control (Git)",
            ]),
            salary: "$100,000 - $130,000".into(),
            posted_date: date(2024, 6, 18),
            employer_id: "employer2".into(),
        },
        Job {
            id: "job3".into(),
            title: "UI/UX Designer".into(),
            company: "Creative Minds Agency".into(),
            location: "San Francisco, CA".into(),
            description: "We need a talented UI/UX Designer to create intuitive and aesthetically pleasing user interfaces for our web and mobile applications.".into(),
            requirements: strings(&[
                "Portfolio showcasing design projects",
                "Proficiency in Figma/Sketch/Adobe XD",
                "User research and wireframing",
                "Prototyping skills",
            ]),
            salary: "$90,000 - $110,000".into(),
            posted_date: date(2024, 6, 20),
            employer_id: "employer1".into(),
        },
        Job {
            id: "job4".into(),
            title: "DevOps Engineer".into(),
            company: "Cloud Innovators".into(),
            location: "Remote".into(),
            description: "Help us build and maintain our infrastructure, CI/CD pipelines, and cloud deployments using AWS, Docker, and Kubernetes.".into(),
            requirements: strings(&[
                "Experience with AWS/Azure/GCP",
                "Docker, Kubernetes",
                "CI/CD tools (Jenkins, GitLab CI)",
                "Scripting (Python/Bash)",
            ]),
            salary: "$115,000 - $140,000".into(),
            posted_date: date(2024, 6, 22),
            employer_id: "employer2".into(),
        },
    ]
}

/// Demo accounts. Both use the password "password".
pub fn initial_users() -> Vec<User> {
    vec![
        User {
            id: "candidate1".into(),
            email: "candidate@example.com".into(),
            password: "password".into(),
            name: "Jane Doe".into(),
            portfolio: Portfolio::empty(Role::Candidate),
        },
        User {
            id: "employer1".into(),
            email: "employer@example.com".into(),
            password: "password".into(),
            name: "Acme Corp".into(),
            portfolio: Portfolio::Employer {
                posted_job_ids: strings(&["job1", "job3"]),
            },
        },
    ]
}
