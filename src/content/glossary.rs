use crate::models::GlossaryTerm;
use once_cell::sync::Lazy;

fn term(id: &str, term: &str, category: &str, definition: &str, related: &[&str]) -> GlossaryTerm {
    GlossaryTerm {
        id: id.to_string(),
        term: term.to_string(),
        definition: definition.to_string(),
        category: category.to_string(),
        related_terms: related.iter().map(|r| r.to_string()).collect(),
    }
}

pub(crate) static GLOSSARY_TERMS: Lazy<Vec<GlossaryTerm>> = Lazy::new(|| {
    vec![
        term(
            "g-1",
            "Onboarding",
            "HR Process",
            "The process of integrating a new employee into an organization, including paperwork, orientation, and training to help them become productive team members.",
            &["Orientation", "New Hire"],
        ),
        term(
            "g-2",
            "PBP (Performance-Based Pay)",
            "Compensation",
            "A compensation strategy where employee pay is directly linked to their performance metrics and achievements within a given period.",
            &["KPI", "Bonus"],
        ),
        term(
            "g-3",
            "Stipend",
            "Compensation",
            "A fixed regular sum paid as a salary or allowance, often provided for specific purposes such as education, training, or living expenses.",
            &["Allowance", "Benefits"],
        ),
        term(
            "g-4",
            "KPI (Key Performance Indicator)",
            "Performance",
            "A measurable value that demonstrates how effectively an employee or department is achieving key business objectives.",
            &["PBP", "Metrics"],
        ),
        term(
            "g-5",
            "Offboarding",
            "HR Process",
            "The formal separation process when an employee leaves the company, including exit interviews, knowledge transfer, and asset return.",
            &["Exit Interview", "Termination"],
        ),
        term(
            "g-6",
            "PTO (Paid Time Off)",
            "Benefits",
            "A policy that provides employees with a bank of hours that can be used for vacation, sick days, or personal time.",
            &["Vacation", "Leave"],
        ),
        term(
            "g-7",
            "HRIS (HR Information System)",
            "Systems",
            "A software solution for managing HR functions including employee data, payroll, benefits, and compliance.",
            &["SAP", "SuccessFactors"],
        ),
        term(
            "g-8",
            "SuccessFactors",
            "Systems",
            "SAP's cloud-based human capital management (HCM) software suite used for HR processes including recruiting, onboarding, and performance management.",
            &["HRIS", "SAP"],
        ),
        term(
            "g-9",
            "LOA (Leave of Absence)",
            "Leave",
            "An approved period of time that an employee is away from work while maintaining their employment status.",
            &["PTO", "FMLA"],
        ),
        term(
            "g-10",
            "FMLA (Family and Medical Leave Act)",
            "Compliance",
            "A US federal law requiring covered employers to provide employees with job-protected unpaid leave for qualified medical and family reasons.",
            &["LOA", "Leave"],
        ),
        term(
            "g-11",
            "Employee Self-Service (ESS)",
            "Systems",
            "A portal or system allowing employees to access and manage their own HR-related information and transactions.",
            &["HRIS", "Portal"],
        ),
        term(
            "g-12",
            "Gross Pay",
            "Payroll",
            "The total amount of money earned by an employee before any deductions such as taxes, insurance, or retirement contributions.",
            &["Net Pay", "Deductions"],
        ),
        term(
            "g-13",
            "Net Pay",
            "Payroll",
            "The amount of money an employee takes home after all deductions have been subtracted from gross pay.",
            &["Gross Pay", "Take-home"],
        ),
        term(
            "g-14",
            "Direct Deposit",
            "Payroll",
            "An electronic payment method that deposits an employee's paycheck directly into their bank account.",
            &["Payment", "Banking"],
        ),
        term(
            "g-15",
            "Ticket",
            "Service",
            "A service request or issue logged in a tracking system like JIRA for resolution by the People Services team.",
            &["JIRA", "Request"],
        ),
    ]
});
