//! Bundled string tables and quote lists.

use super::ui_text::UiText;

pub static ID_TEXT: UiText = UiText {
    splash_sub: "Logika di atas Kekacauan",
    onboarding_title: "Siapa namamu, pencari kebijaksanaan?",
    onboarding_desc: "Marcus akan memanggilmu dengan nama ini.",
    name_label: "Nama",
    start_btn: "Mulai",
    dashboard_greeting: "Salam, {name}.",
    dashboard_prompt: "Apa yang mengganggu pikiranmu hari ini?",
    input_placeholder: "Ceritakan situasimu dengan jujur...",
    img_attached: "Gambar terlampir",
    analyze_btn: "Analisis",
    worst_case_btn: "Premeditatio Malorum (Skenario Terburuk)",
    loading: "Marcus sedang merenung...",
    result_title: "Putusan Stoik",
    filter_title: "Saringan Persepsi",
    facts: "Fakta",
    opinions: "Opini",
    dichotomy_title: "Dikotomi Kendali",
    in_control: "Dalam Kendalimu",
    out_control: "Di Luar Kendalimu",
    verdict_title: "Putusan",
    debate_btn: "Debat dengan Marcus",
    done_btn: "Selesai",
    debate_header: "Marcus Aurelius",
    debate_online: "Daring",
    debate_init: "Kamu tidak setuju dengan putusanku? Sampaikan argumenmu.",
    debate_placeholder: "Tulis bantahanmu...",
    debate_end: "Akhiri",
    send_message: "Kirim",
    language_menu_title: "Bahasa",
    language_reset_notice: "Mengganti bahasa akan mengatur ulang sesi.",
    error: "Oracle sedang diam. Coba lagi nanti.",
};

pub static EN_TEXT: UiText = UiText {
    splash_sub: "Logic over Chaos",
    onboarding_title: "What is your name, seeker?",
    onboarding_desc: "Marcus will address you by this name.",
    name_label: "Name",
    start_btn: "Begin",
    dashboard_greeting: "Greetings, {name}.",
    dashboard_prompt: "What troubles your mind today?",
    input_placeholder: "Describe your situation honestly...",
    img_attached: "Image attached",
    analyze_btn: "Analyze",
    worst_case_btn: "Premeditatio Malorum (Worst Case)",
    loading: "Marcus is contemplating...",
    result_title: "The Stoic Verdict",
    filter_title: "The Filter of Perception",
    facts: "Facts",
    opinions: "Opinions",
    dichotomy_title: "The Dichotomy of Control",
    in_control: "In Your Control",
    out_control: "Outside Your Control",
    verdict_title: "Verdict",
    debate_btn: "Debate with Marcus",
    done_btn: "Done",
    debate_header: "Marcus Aurelius",
    debate_online: "Online",
    debate_init: "You disagree with my verdict? State your argument.",
    debate_placeholder: "Write your rebuttal...",
    debate_end: "End",
    send_message: "Send",
    language_menu_title: "Language",
    language_reset_notice: "Changing language will reset the session.",
    error: "The Oracle is silent. Please try again later.",
};

pub static JP_TEXT: UiText = UiText {
    splash_sub: "混沌より論理を",
    onboarding_title: "探求者よ、あなたの名前は？",
    onboarding_desc: "マルクスはこの名前であなたを呼びます。",
    name_label: "名前",
    start_btn: "始める",
    dashboard_greeting: "ようこそ、{name}。",
    dashboard_prompt: "今日は何があなたの心を悩ませていますか？",
    input_placeholder: "状況を正直に書いてください...",
    img_attached: "画像が添付されました",
    analyze_btn: "分析する",
    worst_case_btn: "プレメディタティオ・マロールム（最悪の事態）",
    loading: "マルクスが熟考しています...",
    result_title: "ストア派の判決",
    filter_title: "知覚のフィルター",
    facts: "事実",
    opinions: "意見",
    dichotomy_title: "コントロールの二分法",
    in_control: "あなたが制御できること",
    out_control: "あなたが制御できないこと",
    verdict_title: "判決",
    debate_btn: "マルクスと議論する",
    done_btn: "完了",
    debate_header: "マルクス・アウレリウス",
    debate_online: "オンライン",
    debate_init: "私の判決に異議があるのか？ 論拠を述べなさい。",
    debate_placeholder: "反論を書いてください...",
    debate_end: "終了",
    send_message: "送信",
    language_menu_title: "言語",
    language_reset_notice: "言語を変更するとセッションがリセットされます。",
    error: "神託は沈黙しています。後でもう一度お試しください。",
};

pub static ES_TEXT: UiText = UiText {
    splash_sub: "Lógica sobre el Caos",
    onboarding_title: "¿Cuál es tu nombre, buscador?",
    onboarding_desc: "Marco te llamará por este nombre.",
    name_label: "Nombre",
    start_btn: "Comenzar",
    dashboard_greeting: "Saludos, {name}.",
    dashboard_prompt: "¿Qué perturba tu mente hoy?",
    input_placeholder: "Describe tu situación con honestidad...",
    img_attached: "Imagen adjunta",
    analyze_btn: "Analizar",
    worst_case_btn: "Premeditatio Malorum (Peor Escenario)",
    loading: "Marco está reflexionando...",
    result_title: "El Veredicto Estoico",
    filter_title: "El Filtro de la Percepción",
    facts: "Hechos",
    opinions: "Opiniones",
    dichotomy_title: "La Dicotomía del Control",
    in_control: "Bajo tu control",
    out_control: "Fuera de tu control",
    verdict_title: "Veredicto",
    debate_btn: "Debatir con Marco",
    done_btn: "Hecho",
    debate_header: "Marco Aurelio",
    debate_online: "En línea",
    debate_init: "¿No estás de acuerdo con mi veredicto? Expón tu argumento.",
    debate_placeholder: "Escribe tu réplica...",
    debate_end: "Terminar",
    send_message: "Enviar",
    language_menu_title: "Idioma",
    language_reset_notice: "Cambiar el idioma reiniciará la sesión.",
    error: "El Oráculo guarda silencio. Inténtalo de nuevo más tarde.",
};

pub static DE_TEXT: UiText = UiText {
    splash_sub: "Logik statt Chaos",
    onboarding_title: "Wie lautet dein Name, Suchender?",
    onboarding_desc: "Marcus wird dich mit diesem Namen ansprechen.",
    name_label: "Name",
    start_btn: "Beginnen",
    dashboard_greeting: "Sei gegrüßt, {name}.",
    dashboard_prompt: "Was beschäftigt dich heute?",
    input_placeholder: "Beschreibe deine Situation ehrlich...",
    img_attached: "Bild angehängt",
    analyze_btn: "Analysieren",
    worst_case_btn: "Premeditatio Malorum (Schlimmster Fall)",
    loading: "Marcus denkt nach...",
    result_title: "Das stoische Urteil",
    filter_title: "Der Filter der Wahrnehmung",
    facts: "Fakten",
    opinions: "Meinungen",
    dichotomy_title: "Die Dichotomie der Kontrolle",
    in_control: "In deiner Kontrolle",
    out_control: "Außerhalb deiner Kontrolle",
    verdict_title: "Urteil",
    debate_btn: "Mit Marcus debattieren",
    done_btn: "Fertig",
    debate_header: "Marcus Aurelius",
    debate_online: "Online",
    debate_init: "Du bist mit meinem Urteil nicht einverstanden? Trage dein Argument vor.",
    debate_placeholder: "Schreibe deine Erwiderung...",
    debate_end: "Beenden",
    send_message: "Senden",
    language_menu_title: "Sprache",
    language_reset_notice: "Ein Sprachwechsel setzt die Sitzung zurück.",
    error: "Das Orakel schweigt. Bitte versuche es später erneut.",
};

pub static ID_QUOTES: &[&str] = &[
    "Kamu memiliki kuasa atas pikiranmu, bukan atas peristiwa di luar. Sadari ini, dan kamu akan menemukan kekuatan.",
    "Rintangan bagi tindakan justru memajukan tindakan. Apa yang menghalangi jalan menjadi jalan.",
    "Kita lebih sering menderita dalam bayangan daripada dalam kenyataan.",
    "Bukan hal-hal itu yang mengganggu kita, melainkan penilaian kita tentangnya.",
    "Kebahagiaan hidupmu bergantung pada kualitas pikiranmu.",
];

pub static EN_QUOTES: &[&str] = &[
    "You have power over your mind, not outside events. Realize this, and you will find strength.",
    "The impediment to action advances action. What stands in the way becomes the way.",
    "We suffer more often in imagination than in reality.",
    "It is not things that disturb us, but our judgements about things.",
    "The happiness of your life depends upon the quality of your thoughts.",
];

pub static JP_QUOTES: &[&str] = &[
    "あなたが力を持つのは外の出来事ではなく、自分の心に対してだ。これを悟れば強さが見つかる。",
    "行動を妨げるものが行動を前進させる。道を塞ぐものが道となる。",
    "我々は現実よりも想像の中で苦しむことの方が多い。",
    "人を悩ませるのは物事そのものではなく、物事についての判断である。",
    "人生の幸福は思考の質にかかっている。",
];

pub static ES_QUOTES: &[&str] = &[
    "Tienes poder sobre tu mente, no sobre los acontecimientos externos. Date cuenta de esto y encontrarás la fuerza.",
    "El impedimento a la acción hace avanzar la acción. Lo que se interpone en el camino se convierte en el camino.",
    "Sufrimos más a menudo en la imaginación que en la realidad.",
    "No son las cosas las que nos perturban, sino nuestros juicios sobre ellas.",
    "La felicidad de tu vida depende de la calidad de tus pensamientos.",
];

pub static DE_QUOTES: &[&str] = &[
    "Du hast Macht über deinen Geist, nicht über äußere Ereignisse. Erkenne dies, und du wirst Stärke finden.",
    "Das Hindernis für das Handeln fördert das Handeln. Was im Weg steht, wird zum Weg.",
    "Wir leiden öfter in der Vorstellung als in der Wirklichkeit.",
    "Nicht die Dinge beunruhigen uns, sondern unsere Urteile über die Dinge.",
    "Das Glück deines Lebens hängt von der Beschaffenheit deiner Gedanken ab.",
];
