use crate::models::{
    FeaturedTemplate, RelatedLink, TagVariant, TemplateTag, TemplateVariants,
};
use once_cell::sync::Lazy;

pub(crate) static FEATURED_TEMPLATE: Lazy<FeaturedTemplate> = Lazy::new(|| FeaturedTemplate {
    title: "Standard Answer".to_string(),
    tags: vec![
        TemplateTag {
            label: "EC-SF".to_string(),
            variant: TagVariant::Info,
        },
        TemplateTag {
            label: "New Hire".to_string(),
            variant: TagVariant::Success,
        },
    ],
    es: TemplateVariants {
        short: r#"Buenos días/Buenas tardes [Nombre del Colaborador],

Gracias por contactarte con People Services. Hemos recibido tu solicitud y la estamos procesando.

📋 Información:
- Tipo: [Descripción de la solicitud]
- Número de caso: [Número de Ticket]
- Tiempo estimado: [X] días hábiles

Te notificaremos cuando completemos el proceso.

Saludos cordiales,
[Nombre del Especialista]
People Services"#
        .to_string(),
        long: r#"Buenos días/Buenas tardes [Nombre del Colaborador],

Gracias por contactarte con People Services. Hemos recibido tu solicitud y entendemos la importancia de resolver esto para ti de manera oportuna.

📋 Información importante:
- Tipo: [Descripción de la solicitud] en EC-SF
- Número de caso: [Número de Ticket]
- Asignado a: [Nombre del Especialista]
- Estado actual: En proceso
- Tiempo estimado: [X] días hábiles (hasta el [fecha estimada])

📌 Próximos pasos:
1. Validaremos la información en nuestros sistemas (1-2 días hábiles)
2. Si necesitamos información adicional, te contactaremos vía [correo/teléfono]
3. Te notificaremos tan pronto completemos el proceso

⏰ ¿Qué puedes hacer mientras tanto?
- Mantén tu correo actualizado para recibir notificaciones
- Consulta el estado en cualquier momento citando tu número de caso: [Número]

💡 ¿Necesitas ayuda adicional?
Si tienes preguntas sobre el proceso o necesitas actualizar información relacionada con tu solicitud, contáctanos:
[Información de contacto]

📊 Tu opinión es importante:
Una vez resolvamos tu solicitud, te invitaremos a completar una breve encuesta (2 minutos) para ayudarnos a mejorar nuestro servicio.

Estamos comprometidos en brindarte la mejor experiencia posible.

Saludos cordiales,

[Nombre del Especialista]
People Services

---
📌 Número de caso: [Número de Ticket] - Guarda este número para futuras referencias"#
        .to_string(),
    },
    en: TemplateVariants {
        short: r#"Good morning/Good afternoon [Employee Name],

Thank you for contacting People Services. We have received your request and are processing it.

📋 Information:
- Type: [Request Description]
- Case number: [Ticket Number]
- Estimated time: [X] business days

We will notify you when we complete the process.

Best regards,
[Specialist Name]
People Services"#
        .to_string(),
        long: r#"Good morning/Good afternoon [Employee Name],

Thank you for contacting People Services. We have received your request and understand the importance of resolving this for you in a timely manner.

📋 Important Information:
- Type: [Request Description] in EC-SF
- Case number: [Ticket Number]
- Assigned to: [Specialist Name]
- Current status: In progress
- Estimated time: [X] business days (until [estimated date])

📌 Next steps:
1. We will validate the information in our systems (1-2 business days)
2. If we need additional information, we will contact you via [email/phone]
3. We will notify you as soon as we complete the process

⏰ What can you do in the meantime?
- Keep your email updated to receive notifications
- Check the status at any time by citing your case number: [Number]

💡 Need additional help?
If you have questions about the process or need to update information related to your request, contact us:
[Contact information]

📊 Your opinion matters:
Once we resolve your request, we will invite you to complete a brief survey (2 minutes) to help us improve our service.

We are committed to providing you with the best possible experience.

Best regards,

[Specialist Name]
People Services

---
📌 Case number: [Ticket Number] - Save this number for future reference"#
        .to_string(),
    },
    pt: TemplateVariants {
        short: r#"Bom dia/Boa tarde [Nome do Colaborador],

Obrigado por entrar em contato com People Services. Recebemos sua solicitação e estamos processando.

📋 Informações:
- Tipo: [Descrição da solicitação]
- Número do caso: [Número do Ticket]
- Tempo estimado: [X] dias úteis

Notificaremos você quando concluirmos o processo.

Atenciosamente,
[Nome do Especialista]
People Services"#
        .to_string(),
        long: r#"Bom dia/Boa tarde [Nome do Colaborador],

Obrigado por entrar em contato com People Services. Recebemos sua solicitação e entendemos a importância de resolver isso para você de maneira oportuna.

📋 Informações importantes:
- Tipo: [Descrição da solicitação] em EC-SF
- Número do caso: [Número do Ticket]
- Atribuído a: [Nome do Especialista]
- Status atual: Em andamento
- Tempo estimado: [X] dias úteis (até [data estimada])

📌 Próximos passos:
1. Validaremos as informações em nossos sistemas (1-2 dias úteis)
2. Se precisarmos de informações adicionais, entraremos em contato via [e-mail/telefone]
3. Notificaremos você assim que concluirmos o processo

⏰ O que você pode fazer enquanto isso?
- Mantenha seu e-mail atualizado para receber notificações
- Consulte o status a qualquer momento citando seu número de caso: [Número]

💡 Precisa de ajuda adicional?
Se você tiver dúvidas sobre o processo ou precisar atualizar informações relacionadas à sua solicitação, entre em contato:
[Informações de contato]

📊 Sua opinião é importante:
Assim que resolvermos sua solicitação, convidaremos você a completar uma breve pesquisa (2 minutos) para nos ajudar a melhorar nosso serviço.

Estamos comprometidos em fornecer a você a melhor experiência possível.

Atenciosamente,

[Nome do Especialista]
People Services

---
📌 Número do caso: [Número do Ticket] - Guarde este número para referência futura"#
        .to_string(),
    },
    when_to_use: vec![
        "After completing new hire setup in EC-SF".to_string(),
        "When all systems are configured".to_string(),
        "Before closing the JIRA ticket".to_string(),
    ],
    related: vec![
        RelatedLink {
            label: "New Hire - Initial Comment".to_string(),
            path: "/templates/new-hire-initial".to_string(),
        },
        RelatedLink {
            label: "New Hire - Incomplete Information".to_string(),
            path: "/templates/new-hire-incomplete".to_string(),
        },
    ],
});
