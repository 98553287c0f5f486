use crate::models::{EmailTemplate, LocalizedText};
use once_cell::sync::Lazy;

use super::keywords;

pub(crate) static EMAIL_TEMPLATES: Lazy<Vec<EmailTemplate>> = Lazy::new(|| {
    vec![
        EmailTemplate {
            id: "et-1".to_string(),
            title: "Request Confirmation".to_string(),
            category: "General".to_string(),
            description: "Confirm receipt of a request".to_string(),
            keywords: keywords(&["confirmation", "receipt", "ticket", "received", "acknowledge"]),
            subject: LocalizedText::new(
                "Confirmación de Solicitud - [Número de Ticket]",
                "Request Confirmation - [Ticket Number]",
                "Confirmação de Solicitação - [Número do Ticket]",
            ),
            body: LocalizedText::new(
                "Estimado/a [Nombre],\n\nHemos recibido su solicitud y ha sido registrada con el número [Ticket]. Nuestro equipo revisará su caso en las próximas 24-48 horas hábiles.\n\nSaludos cordiales,\nPeople Services",
                "Dear [Name],\n\nWe have received your request and it has been registered with number [Ticket]. Our team will review your case within the next 24-48 business hours.\n\nBest regards,\nPeople Services",
                "Prezado/a [Nome],\n\nRecebemos sua solicitação e ela foi registrada com o número [Ticket]. Nossa equipe analisará seu caso nas próximas 24-48 horas úteis.\n\nAtenciosamente,\nPeople Services",
            ),
        },
        EmailTemplate {
            id: "et-2".to_string(),
            title: "Missing Information Request".to_string(),
            category: "Follow-up".to_string(),
            description: "Request additional information from employee".to_string(),
            keywords: keywords(&["missing", "information", "documents", "follow-up", "request"]),
            subject: LocalizedText::new(
                "Información Adicional Requerida - [Número de Ticket]",
                "Additional Information Required - [Ticket Number]",
                "Informações Adicionais Necessárias - [Número do Ticket]",
            ),
            body: LocalizedText::new(
                "Estimado/a [Nombre],\n\nPara procesar su solicitud [Ticket], necesitamos la siguiente información:\n\n- [Documento 1]\n- [Documento 2]\n\nPor favor, envíe esta información a la brevedad.\n\nSaludos cordiales,\nPeople Services",
                "Dear [Name],\n\nTo process your request [Ticket], we need the following information:\n\n- [Document 1]\n- [Document 2]\n\nPlease send this information at your earliest convenience.\n\nBest regards,\nPeople Services",
                "Prezado/a [Nome],\n\nPara processar sua solicitação [Ticket], precisamos das seguintes informações:\n\n- [Documento 1]\n- [Documento 2]\n\nPor favor, envie essas informações o mais rápido possível.\n\nAtenciosamente,\nPeople Services",
            ),
        },
        EmailTemplate {
            id: "et-3".to_string(),
            title: "Request Completed".to_string(),
            category: "Resolution".to_string(),
            description: "Notify that request has been completed".to_string(),
            keywords: keywords(&["completed", "resolved", "done", "finished", "processed"]),
            subject: LocalizedText::new(
                "Solicitud Completada - [Número de Ticket]",
                "Request Completed - [Ticket Number]",
                "Solicitação Concluída - [Número do Ticket]",
            ),
            body: LocalizedText::new(
                "Estimado/a [Nombre],\n\nNos complace informarle que su solicitud [Ticket] ha sido procesada exitosamente.\n\n[Detalles de la resolución]\n\nSi tiene alguna pregunta, no dude en contactarnos.\n\nSaludos cordiales,\nPeople Services",
                "Dear [Name],\n\nWe are pleased to inform you that your request [Ticket] has been successfully processed.\n\n[Resolution details]\n\nIf you have any questions, please don't hesitate to contact us.\n\nBest regards,\nPeople Services",
                "Prezado/a [Nome],\n\nTemos o prazer de informar que sua solicitação [Ticket] foi processada com sucesso.\n\n[Detalhes da resolução]\n\nSe você tiver alguma dúvida, não hesite em nos contatar.\n\nAtenciosamente,\nPeople Services",
            ),
        },
    ]
});
