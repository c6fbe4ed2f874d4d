//! Demo dataset loaded at startup.
//!
//! The records mirror the original dashboard's sample data. Timestamps are
//! relative to process start so "recent" listings and the rolling 7/30-day
//! job statistics stay meaningful.

use time::{Duration, OffsetDateTime};

use crate::domain::{
    Activity, ActivityKind, ApplicationStatus, Customer, ExperienceLevel, Job, JobApplication,
    JobType, Order, Product, ProfessionalArea, Role, User, UserProfile,
};

use super::mem::Tables;

pub(super) fn populate(tables: &mut Tables) {
    let now = OffsetDateTime::now_utc();

    // Sample users
    tables.users.insert(
        1,
        User {
            id: 1,
            username: "juan.perez".into(),
            password: "password123".into(),
            email: Some("juan.perez@ejemplo.com".into()),
            role: Role::Admin,
            created_at: now,
        },
    );
    tables.users.insert(
        2,
        User {
            id: 2,
            username: "maria.gonzalez".into(),
            password: "password123".into(),
            email: Some("maria.gonzalez@ejemplo.com".into()),
            role: Role::User,
            created_at: now,
        },
    );

    // Sample products
    let products = [
        (
            1,
            "PRD-001",
            "Auriculares Inalámbricos Pro",
            "Auriculares inalámbricos de alta calidad con cancelación de ruido",
            "$159.99",
            "Electrónica",
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=80&h=80",
            324,
        ),
        (
            2,
            "PRD-002",
            "Altavoz Bluetooth Portátil",
            "Altavoz portátil con 20 horas de batería y resistente al agua",
            "$89.99",
            "Electrónica",
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=80&h=80",
            256,
        ),
        (
            3,
            "PRD-003",
            "Zapatillas Deportivas Run+",
            "Zapatillas para correr de alto rendimiento con amortiguación extra",
            "$129.99",
            "Ropa",
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=80&h=80",
            198,
        ),
    ];
    for (id, product_id, name, description, price, category, image_url, sales) in products {
        tables.products.insert(
            id,
            Product {
                id,
                product_id: product_id.into(),
                name: name.into(),
                description: Some(description.into()),
                price: price.into(),
                category: category.into(),
                image_url: Some(image_url.into()),
                sales,
                created_at: now,
            },
        );
    }

    // Sample orders, newest first
    let orders = [
        (
            1,
            "ORD-0102",
            2,
            "Entregado",
            "$124.00",
            "24 May, 2023",
            now,
            "María González",
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=60&h=60",
        ),
        (
            2,
            "ORD-0101",
            3,
            "En proceso",
            "$89.50",
            "24 May, 2023",
            now - Duration::hours(1),
            "Carlos Rodríguez",
            "https://images.unsplash.com/photo-1599566150163-29194dcaad36?w=60&h=60",
        ),
        (
            3,
            "ORD-0100",
            4,
            "Cancelado",
            "$215.75",
            "23 May, 2023",
            now - Duration::hours(24),
            "Ana Martínez",
            "https://images.unsplash.com/photo-1580489944761-15a19d654956?w=60&h=60",
        ),
        (
            4,
            "ORD-0099",
            5,
            "Entregado",
            "$67.25",
            "23 May, 2023",
            now - Duration::hours(48),
            "Luis Hernández",
            "https://images.unsplash.com/photo-1552058544-f2b08422138a?w=60&h=60",
        ),
    ];
    for (id, order_number, user_id, status, total, date, created_at, name, avatar_url) in orders {
        tables.orders.insert(
            id,
            Order {
                id,
                order_number: order_number.into(),
                user_id,
                status: status.into(),
                total: total.into(),
                date: date.into(),
                created_at,
                customer: Customer {
                    name: name.into(),
                    avatar_url: avatar_url.into(),
                },
            },
        );
    }

    // Sample activities
    let activities = [
        (
            1,
            ActivityKind::User,
            "Nuevo usuario registrado <span class=\"font-medium\">Laura Sánchez</span>",
            "Hace 5 minutos",
            now,
        ),
        (
            2,
            ActivityKind::Order,
            "Nuevo pedido <span class=\"font-medium\">#ORD-0102</span> completado",
            "Hace 27 minutos",
            now - Duration::minutes(27),
        ),
        (
            3,
            ActivityKind::Refund,
            "Solicitud de reembolso para el pedido <span class=\"font-medium\">#ORD-0097</span>",
            "Hace 1 hora",
            now - Duration::hours(1),
        ),
        (
            4,
            ActivityKind::Message,
            "Nuevo mensaje de <span class=\"font-medium\">Carlos Rodríguez</span>",
            "Hace 3 horas",
            now - Duration::hours(3),
        ),
    ];
    for (id, kind, message, time_ago, created_at) in activities {
        tables.activities.insert(
            id,
            Activity {
                id,
                kind,
                message: message.into(),
                time_ago: time_ago.into(),
                created_at,
            },
        );
    }

    // Professional areas
    let areas = [
        (1, "Tecnología", "Desarrollo de software, IT, sistemas"),
        (2, "Marketing", "Marketing digital, publicidad, ventas"),
        (3, "Finanzas", "Contabilidad, análisis financiero, banca"),
        (4, "Recursos Humanos", "Gestión de talento, reclutamiento"),
        (5, "Diseño", "Diseño gráfico, UX/UI, creatividad"),
    ];
    for (id, name, description) in areas {
        tables.areas.insert(
            id,
            ProfessionalArea {
                id,
                name: name.into(),
                description: Some(description.into()),
                created_at: now,
            },
        );
    }

    // Candidate profiles
    tables.profiles.insert(
        1,
        UserProfile {
            id: 1,
            user_id: 2,
            full_name: "María González".into(),
            email: "maria.gonzalez@ejemplo.com".into(),
            phone: Some("809-555-1234".into()),
            professional_area_id: Some(1),
            experience: Some(
                "3 años de experiencia en desarrollo frontend con React y Vue.js.".into(),
            ),
            skills: vec![
                "React".into(),
                "Vue.js".into(),
                "JavaScript".into(),
                "TypeScript".into(),
                "HTML".into(),
                "CSS".into(),
                "Git".into(),
            ],
            education: Some("Ingeniería en Sistemas, PUCMM".into()),
            summary: Some(
                "Desarrolladora frontend apasionada por crear interfaces intuitivas.".into(),
            ),
            expected_salary: Some("$30,000 - $40,000".into()),
            available_for_work: true,
            created_at: now - Duration::days(25),
            updated_at: now - Duration::days(25),
        },
    );
    tables.profiles.insert(
        2,
        UserProfile {
            id: 2,
            user_id: 1,
            full_name: "Juan Pérez".into(),
            email: "juan.perez@ejemplo.com".into(),
            phone: Some("809-555-5678".into()),
            professional_area_id: Some(2),
            experience: Some(
                "5 años en marketing digital, especializado en Google Ads y Facebook Ads.".into(),
            ),
            skills: vec![
                "Google Ads".into(),
                "Facebook Ads".into(),
                "SEO".into(),
                "Analytics".into(),
                "Marketing Automation".into(),
            ],
            education: Some("Licenciatura en Marketing, UASD".into()),
            summary: Some(
                "Especialista en marketing digital con track record en generación de leads.".into(),
            ),
            expected_salary: Some("$35,000 - $45,000".into()),
            available_for_work: true,
            created_at: now - Duration::days(23),
            updated_at: now - Duration::days(23),
        },
    );

    // Job postings
    tables.jobs.insert(
        1,
        Job {
            id: 1,
            title: "Desarrollador Frontend React".into(),
            company: "TechCorp".into(),
            description: "Buscamos un desarrollador frontend con experiencia en React y TypeScript \
                          para unirse a nuestro equipo de desarrollo de productos."
                .into(),
            requirements: vec!["React".into(), "TypeScript".into(), "CSS".into(), "Git".into()],
            benefits: vec![
                "Trabajo remoto".into(),
                "Seguro médico".into(),
                "Capacitaciones".into(),
            ],
            professional_area_id: Some(1),
            location: Some("Santo Domingo, RD".into()),
            job_type: JobType::FullTime,
            experience_level: ExperienceLevel::Mid,
            salary_range: Some("$35,000 - $45,000".into()),
            contact_email: "reclutamiento@techcorp.com".into(),
            contact_phone: Some("809-555-0123".into()),
            application_deadline: None,
            is_active: true,
            published_by: 1,
            created_at: now - Duration::days(20),
            updated_at: now - Duration::days(20),
        },
    );
    tables.jobs.insert(
        2,
        Job {
            id: 2,
            title: "Especialista en Marketing Digital".into(),
            company: "MarketPro".into(),
            description: "Buscamos un especialista en marketing digital para gestionar nuestras \
                          campañas en redes sociales y SEO."
                .into(),
            requirements: vec![
                "Google Ads".into(),
                "Facebook Ads".into(),
                "SEO".into(),
                "Analytics".into(),
            ],
            benefits: vec!["Horario flexible".into(), "Bonos por rendimiento".into()],
            professional_area_id: Some(2),
            location: Some("Santiago, RD".into()),
            job_type: JobType::FullTime,
            experience_level: ExperienceLevel::Entry,
            salary_range: Some("$25,000 - $32,000".into()),
            contact_email: "jobs@marketpro.com".into(),
            contact_phone: None,
            application_deadline: None,
            is_active: true,
            published_by: 1,
            created_at: now - Duration::days(15),
            updated_at: now - Duration::days(15),
        },
    );
    tables.jobs.insert(
        3,
        Job {
            id: 3,
            title: "Diseñador UX/UI".into(),
            company: "DesignStudio".into(),
            description: "Únete a nuestro equipo creativo como diseñador UX/UI para crear \
                          experiencias digitales excepcionales."
                .into(),
            requirements: vec![
                "Figma".into(),
                "Adobe XD".into(),
                "Prototipado".into(),
                "User Research".into(),
            ],
            benefits: vec![
                "Ambiente creativo".into(),
                "Proyectos internacionales".into(),
                "Crecimiento profesional".into(),
            ],
            professional_area_id: Some(5),
            location: Some("Santo Domingo, RD".into()),
            job_type: JobType::FullTime,
            experience_level: ExperienceLevel::Senior,
            salary_range: Some("$40,000 - $55,000".into()),
            contact_email: "careers@designstudio.com".into(),
            contact_phone: Some("809-555-0456".into()),
            application_deadline: None,
            is_active: true,
            published_by: 1,
            created_at: now - Duration::days(5),
            updated_at: now - Duration::days(5),
        },
    );

    // Applications: one per posting plus one spontaneous application
    tables.applications.insert(
        1,
        JobApplication {
            id: 1,
            job_id: Some(1),
            user_profile_id: 1,
            cover_letter: "Estimado equipo de reclutamiento, estoy muy interesada en la posición \
                           de Desarrollador Frontend React."
                .into(),
            status: ApplicationStatus::Pending,
            reviewed_by: None,
            reviewed_at: None,
            notes: None,
            applied_at: now - Duration::days(2),
            created_at: now - Duration::days(2),
            updated_at: now - Duration::days(2),
        },
    );
    tables.applications.insert(
        2,
        JobApplication {
            id: 2,
            job_id: Some(2),
            user_profile_id: 2,
            cover_letter: "Hola equipo de MarketPro, me postulo para la posición de Especialista \
                           en Marketing Digital."
                .into(),
            status: ApplicationStatus::Reviewed,
            reviewed_by: Some(1),
            reviewed_at: Some(now - Duration::days(8)),
            notes: Some("Candidato prometedor con buena experiencia. Programar entrevista.".into()),
            applied_at: now - Duration::days(9),
            created_at: now - Duration::days(9),
            updated_at: now - Duration::days(8),
        },
    );
    tables.applications.insert(
        3,
        JobApplication {
            id: 3,
            job_id: Some(3),
            user_profile_id: 1,
            cover_letter: "Aunque mi experiencia principal es en desarrollo frontend, tengo un \
                           gran interés en UX/UI."
                .into(),
            status: ApplicationStatus::Rejected,
            reviewed_by: Some(1),
            reviewed_at: Some(now - Duration::days(5)),
            notes: Some(
                "Perfil interesante pero buscamos alguien con más experiencia en UX/UI.".into(),
            ),
            applied_at: now - Duration::days(6),
            created_at: now - Duration::days(6),
            updated_at: now - Duration::days(5),
        },
    );
    tables.applications.insert(
        4,
        JobApplication {
            id: 4,
            job_id: None,
            user_profile_id: 2,
            cover_letter: "Estoy abierto a nuevas oportunidades en el área de marketing y \
                           publicidad digital."
                .into(),
            status: ApplicationStatus::Pending,
            reviewed_by: None,
            reviewed_at: None,
            notes: None,
            applied_at: now - Duration::days(1),
            created_at: now - Duration::days(1),
            updated_at: now - Duration::days(1),
        },
    );

    // Counters continue past the seeded ids
    tables.counters.users = 3;
    tables.counters.products = 4;
    tables.counters.orders = 5;
    tables.counters.activities = 5;
    tables.counters.areas = 6;
    tables.counters.profiles = 3;
    tables.counters.jobs = 4;
    tables.counters.applications = 5;
}
