use crate::models::{LocalizedText, SecurityScript};
use once_cell::sync::Lazy;

pub(crate) static SECURITY_SCRIPTS: Lazy<Vec<SecurityScript>> = Lazy::new(|| {
    vec![
        SecurityScript {
            id: "sec-1".to_string(),
            title: "Identity Verification - Employee".to_string(),
            category: "Verification".to_string(),
            questions: vec![
                LocalizedText::new(
                    "¿Cuál es su número de empleado?",
                    "What is your employee number?",
                    "Qual é o seu número de funcionário?",
                ),
                LocalizedText::new(
                    "¿Cuál es su fecha de nacimiento?",
                    "What is your date of birth?",
                    "Qual é a sua data de nascimento?",
                ),
                LocalizedText::new(
                    "¿Cuál es el nombre de su supervisor directo?",
                    "What is the name of your direct supervisor?",
                    "Qual é o nome do seu supervisor direto?",
                ),
            ],
        },
        SecurityScript {
            id: "sec-2".to_string(),
            title: "Password Reset Authorization".to_string(),
            category: "Authorization".to_string(),
            questions: vec![
                LocalizedText::new(
                    "¿Cuáles son los últimos 4 dígitos de su SSN?",
                    "What are the last 4 digits of your SSN?",
                    "Quais são os últimos 4 dígitos do seu SSN?",
                ),
                LocalizedText::new(
                    "¿Cuál es su dirección de correo corporativo?",
                    "What is your corporate email address?",
                    "Qual é o seu endereço de e-mail corporativo?",
                ),
                LocalizedText::new(
                    "¿En qué departamento trabaja?",
                    "What department do you work in?",
                    "Em qual departamento você trabalha?",
                ),
            ],
        },
        SecurityScript {
            id: "sec-3".to_string(),
            title: "Payroll Information Request".to_string(),
            category: "Sensitive Data".to_string(),
            questions: vec![
                LocalizedText::new(
                    "¿Cuál fue su último banco registrado para depósitos?",
                    "What was your last registered bank for deposits?",
                    "Qual foi o seu último banco registrado para depósitos?",
                ),
                LocalizedText::new(
                    "¿Cuál es su ubicación de trabajo actual?",
                    "What is your current work location?",
                    "Qual é a sua localização de trabalho atual?",
                ),
                LocalizedText::new(
                    "Confirme su estado civil actual registrado en el sistema.",
                    "Confirm your current marital status registered in the system.",
                    "Confirme seu estado civil atual registrado no sistema.",
                ),
            ],
        },
    ]
});
