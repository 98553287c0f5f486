use crate::models::{LocalizedText, PhoneScript};
use once_cell::sync::Lazy;

use super::keywords;

pub(crate) static PHONE_SCRIPTS: Lazy<Vec<PhoneScript>> = Lazy::new(|| {
    vec![
        PhoneScript {
            id: "ps-1".to_string(),
            title: "Greeting - Standard Opening".to_string(),
            category: "General".to_string(),
            description: "Standard greeting for incoming calls".to_string(),
            keywords: keywords(&["greeting", "opening", "hello", "welcome", "call"]),
            content: LocalizedText::new(
                "Buenos días/tardes, gracias por llamar a People Services, mi nombre es [Nombre]. ¿En qué puedo ayudarle hoy?",
                "Good morning/afternoon, thank you for calling People Services, my name is [Name]. How may I help you today?",
                "Bom dia/boa tarde, obrigado por ligar para People Services, meu nome é [Nome]. Como posso ajudá-lo hoje?",
            ),
        },
        PhoneScript {
            id: "ps-2".to_string(),
            title: "Hold Request".to_string(),
            category: "General".to_string(),
            description: "Request to place caller on hold".to_string(),
            keywords: keywords(&["hold", "wait", "verify", "system", "brief"]),
            content: LocalizedText::new(
                "¿Me permite un momento mientras verifico esta información en nuestro sistema?",
                "May I place you on a brief hold while I verify this information in our system?",
                "Posso colocá-lo em espera por um momento enquanto verifico essas informações em nosso sistema?",
            ),
        },
        PhoneScript {
            id: "ps-3".to_string(),
            title: "Transfer Announcement".to_string(),
            category: "Transfer".to_string(),
            description: "Announcing a call transfer".to_string(),
            keywords: keywords(&["transfer", "department", "line", "redirect"]),
            content: LocalizedText::new(
                "Voy a transferir su llamada al departamento de [Departamento]. Por favor, permanezca en línea.",
                "I'm going to transfer your call to the [Department] department. Please stay on the line.",
                "Vou transferir sua chamada para o departamento de [Departamento]. Por favor, aguarde na linha.",
            ),
        },
        PhoneScript {
            id: "ps-4".to_string(),
            title: "Closing - Standard".to_string(),
            category: "Closing".to_string(),
            description: "Standard call closing script".to_string(),
            keywords: keywords(&["closing", "goodbye", "thank you", "end call"]),
            content: LocalizedText::new(
                "¿Hay algo más en lo que pueda ayudarle hoy? Gracias por llamar a People Services. Que tenga un excelente día.",
                "Is there anything else I can help you with today? Thank you for calling People Services. Have a great day.",
                "Há mais alguma coisa em que eu possa ajudá-lo hoje? Obrigado por ligar para People Services. Tenha um ótimo dia.",
            ),
        },
    ]
});
