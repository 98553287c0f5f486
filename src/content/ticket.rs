use crate::models::{LocalizedText, TicketResponse};
use once_cell::sync::Lazy;

use super::keywords;

// Every response is written for JIRA tickets, hence the shared keyword.
pub(crate) static TICKET_RESPONSES: Lazy<Vec<TicketResponse>> = Lazy::new(|| {
    vec![
        TicketResponse {
            id: "tr-1".to_string(),
            title: "Initial Acknowledgment".to_string(),
            category: "Opening".to_string(),
            description: "First response to a JIRA ticket".to_string(),
            keywords: keywords(&["acknowledgment", "initial", "first", "received", "working", "jira"]),
            content: LocalizedText::new(
                "Hola [Nombre],\n\nGracias por tu solicitud. He revisado tu caso y estoy trabajando en ello. Te mantendré informado sobre el progreso.\n\nSaludos,\n[Tu nombre]",
                "Hi [Name],\n\nThank you for your request. I have reviewed your case and am working on it. I will keep you informed of progress.\n\nRegards,\n[Your name]",
                "Olá [Nome],\n\nObrigado pela sua solicitação. Analisei seu caso e estou trabalhando nele. Vou mantê-lo informado sobre o progresso.\n\nAtenciosamente,\n[Seu nome]",
            ),
        },
        TicketResponse {
            id: "tr-2".to_string(),
            title: "Pending Information".to_string(),
            category: "Follow-up".to_string(),
            description: "Request more info via JIRA".to_string(),
            keywords: keywords(&["pending", "information", "waiting", "need", "require", "jira"]),
            content: LocalizedText::new(
                "Hola [Nombre],\n\nPara continuar con tu solicitud, necesito la siguiente información:\n\n- [Item 1]\n- [Item 2]\n\nUna vez recibida, procesaré tu caso inmediatamente.\n\nSaludos,\n[Tu nombre]",
                "Hi [Name],\n\nTo proceed with your request, I need the following information:\n\n- [Item 1]\n- [Item 2]\n\nOnce received, I will process your case immediately.\n\nRegards,\n[Your name]",
                "Olá [Nome],\n\nPara prosseguir com sua solicitação, preciso das seguintes informações:\n\n- [Item 1]\n- [Item 2]\n\nAssim que recebidas, processarei seu caso imediatamente.\n\nAtenciosamente,\n[Seu nome]",
            ),
        },
        TicketResponse {
            id: "tr-3".to_string(),
            title: "Resolution Complete".to_string(),
            category: "Closing".to_string(),
            description: "Close ticket with resolution".to_string(),
            keywords: keywords(&["resolution", "complete", "closed", "solved", "done", "jira"]),
            content: LocalizedText::new(
                "Hola [Nombre],\n\nTu solicitud ha sido completada exitosamente. Los cambios están ahora activos en el sistema.\n\nSi tienes alguna pregunta adicional, no dudes en responder a este ticket.\n\nSaludos,\n[Tu nombre]",
                "Hi [Name],\n\nYour request has been successfully completed. The changes are now active in the system.\n\nIf you have any additional questions, please don't hesitate to reply to this ticket.\n\nRegards,\n[Your name]",
                "Olá [Nome],\n\nSua solicitação foi concluída com sucesso. As alterações estão agora ativas no sistema.\n\nSe você tiver alguma dúvida adicional, não hesite em responder a este ticket.\n\nAtenciosamente,\n[Seu nome]",
            ),
        },
    ]
});
