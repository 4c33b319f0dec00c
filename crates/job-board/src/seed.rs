//! Dummy postings the board starts with until a real jobs API is configured.
use jobboard_common::model::{Job, JobType};

struct SeedJob {
    id: u32,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    job_type: JobType,
    salary: &'static str,
    description: &'static str,
    requirements: [&'static str; 4],
    posted_at: &'static str,
    logo: &'static str,
}

const SEED_JOBS: [SeedJob; 4] = [
    SeedJob {
        id: 1,
        title: "Frontend Developer",
        company: "PT Teknologi Indonesia",
        location: "Jakarta Selatan",
        job_type: JobType::FullTime,
        salary: "Rp 5.000.000 - Rp 8.000.000",
        description: "Membangun dan mengembangkan user interface untuk aplikasi web perusahaan menggunakan Vue.js dan React.",
        requirements: [
            "Menguasai HTML, CSS, JavaScript",
            "Pengalaman dengan Vue.js atau React",
            "Memahami responsive design",
            "Lulusan SMK jurusan RPL/TKJ",
        ],
        posted_at: "2026-02-01",
        logo: "https://ui-avatars.com/api/?name=PT+TI&background=3B82F6&color=fff",
    },
    SeedJob {
        id: 2,
        title: "Staff Administrasi",
        company: "CV Maju Bersama",
        location: "Bandung",
        job_type: JobType::FullTime,
        salary: "Rp 3.500.000 - Rp 4.500.000",
        description: "Mengelola dokumen administrasi kantor, input data, dan membantu operasional harian.",
        requirements: [
            "Menguasai Microsoft Office",
            "Teliti dan rapi",
            "Komunikasi baik",
            "Lulusan SMK jurusan OTKP/Administrasi",
        ],
        posted_at: "2026-02-03",
        logo: "https://ui-avatars.com/api/?name=CV+MB&background=10B981&color=fff",
    },
    SeedJob {
        id: 3,
        title: "Teknisi Jaringan",
        company: "PT Network Solutions",
        location: "Surabaya",
        job_type: JobType::Contract,
        salary: "Rp 4.000.000 - Rp 6.000.000",
        description: "Instalasi, konfigurasi, dan maintenance jaringan komputer perusahaan.",
        requirements: [
            "Menguasai TCP/IP, routing, switching",
            "Sertifikasi MTCNA menjadi nilai plus",
            "Bersedia bekerja shift",
            "Lulusan SMK jurusan TKJ",
        ],
        posted_at: "2026-02-05",
        logo: "https://ui-avatars.com/api/?name=PT+NS&background=8B5CF6&color=fff",
    },
    SeedJob {
        id: 4,
        title: "Desainer Grafis",
        company: "Creative Studio",
        location: "Yogyakarta",
        job_type: JobType::Internship,
        salary: "Rp 1.500.000 - Rp 2.500.000",
        description: "Membuat desain untuk kebutuhan marketing seperti poster, banner, dan konten sosial media.",
        requirements: [
            "Menguasai Adobe Photoshop & Illustrator",
            "Kreatif dan update dengan tren desain",
            "Portfolio wajib dilampirkan",
            "Lulusan SMK jurusan Multimedia/DKV",
        ],
        posted_at: "2026-02-04",
        logo: "https://ui-avatars.com/api/?name=CS&background=EC4899&color=fff",
    },
];

pub fn seed_jobs() -> Vec<Job> {
    SEED_JOBS
        .iter()
        .map(|seed| Job {
            id: seed.id,
            title: seed.title.to_string(),
            company: seed.company.to_string(),
            location: seed.location.to_string(),
            job_type: seed.job_type,
            salary: seed.salary.to_string(),
            description: seed.description.to_string(),
            requirements: seed.requirements.iter().map(|r| r.to_string()).collect(),
            posted_at: seed.posted_at.to_string(),
            logo: seed.logo.to_string(),
        })
        .collect()
}
