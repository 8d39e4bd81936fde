//! The canonical rule table.
//!
//! Order is significant: rules are evaluated top to bottom and the first match
//! wins, so broad needles near the top (for example "hi", "attendance", "app")
//! shadow narrower rules further down. Do not reorder or dedupe.

use super::{Rule, Trigger};

/// Every rule the responder knows, in evaluation order.
pub static RULES: &[Rule] = &[
    Rule {
        topic: "Greetings",
        trigger: Trigger::Any(&["hello", "hi", "hey"]),
        reply: "Hello 👋! How can I assist you today?",
    },
    Rule {
        topic: "Basic course info",
        trigger: Trigger::Any(&["course", "courses"]),
        reply: "We offer Python, Web Development, Data Science, Machine Learning, Java, and more.",
    },
    Rule {
        topic: "Project help",
        trigger: Trigger::Any(&["project"]),
        reply: "For projects, pick a topic you like, break it into sections, research each part, and build step-by-step.",
    },
    Rule {
        topic: "Registration",
        trigger: Trigger::Any(&["register", "signup"]),
        reply: "To register, go to the Register page, fill your details, and create a strong password.",
    },
    Rule {
        topic: "Thanks",
        trigger: Trigger::Any(&["thank"]),
        reply: "You're welcome 😊! Let me know if you need more help.",
    },
    Rule {
        topic: "Goodbye",
        trigger: Trigger::Any(&["bye", "logout"]),
        reply: "Goodbye 👋! Study well and come back anytime.",
    },
    Rule {
        topic: "ML Recommendation",
        trigger: Trigger::Any(&["recommend", "suggest"]),
        reply: "Based on your learning pattern, I recommend focusing on Python fundamentals and practicing daily.",
    },
    Rule {
        topic: "Attendance-related",
        trigger: Trigger::Any(&["attendance"]),
        reply: "Your attendance must be above 75% to avoid academic alerts.",
    },
    Rule {
        topic: "Low attendance",
        trigger: Trigger::Any(&["low attendance", "attendance drop"]),
        reply: "Your attendance is low. Please attend upcoming classes regularly to avoid warnings.",
    },
    Rule {
        topic: "Performance",
        trigger: Trigger::Any(&["performance", "result"]),
        reply: "Your recent performance shows improvement. Keep solving assignments regularly.",
    },
    Rule {
        topic: "How to improve",
        trigger: Trigger::Any(&["improve"]),
        reply: "To improve academically, revise notes daily and solve previous assignments.",
    },
    Rule {
        topic: "Study material",
        trigger: Trigger::Any(&["material", "notes"]),
        reply: "Study materials are available in the Resources tab of your dashboard.",
    },
    Rule {
        topic: "Dashboard",
        trigger: Trigger::Any(&["dashboard"]),
        reply: "Your student dashboard shows your performance graph, attendance, and course progress.",
    },
    Rule {
        topic: "Admin dashboard",
        trigger: Trigger::Any(&["admin"]),
        reply: "The admin dashboard helps manage students, performance, and attendance alerts.",
    },
    Rule {
        topic: "Forgot password",
        trigger: Trigger::All(&["forgot", "password"]),
        reply: "Click the 'Forgot Password' option on the login page to reset it.",
    },
    Rule {
        topic: "Login issue",
        trigger: Trigger::Any(&["login", "can't login"]),
        reply: "Make sure your username and password are correct. If not, reset your password.",
    },
    Rule {
        topic: "Student login credentials info",
        trigger: Trigger::Any(&["student login"]),
        reply: "Use your student ID and password to log in to your dashboard.",
    },
    Rule {
        topic: "Admin credentials",
        trigger: Trigger::Any(&["admin login"]),
        reply: "Only admins with verified credentials can access the admin panel.",
    },
    Rule {
        topic: "Attendance meaning",
        trigger: Trigger::Any(&["what is attendance"]),
        reply: "Attendance represents class participation percentage. Stay above 75%.",
    },
    Rule {
        topic: "Course timing",
        trigger: Trigger::Any(&["timing", "schedule"]),
        reply: "Classes are available in morning, afternoon, and evening batches.",
    },
    Rule {
        topic: "When is next class?",
        trigger: Trigger::Any(&["next class"]),
        reply: "Check your dashboard calendar for your next class schedule.",
    },
    Rule {
        topic: "Assignments",
        trigger: Trigger::Any(&["assignment"]),
        reply: "Assignments are released weekly. Submit on time for best performance.",
    },
    Rule {
        topic: "Late submission",
        trigger: Trigger::All(&["late", "assignment"]),
        reply: "Late submissions may receive reduced marks. Please inform your instructor.",
    },
    Rule {
        topic: "Exams",
        trigger: Trigger::Any(&["exam"]),
        reply: "Exams are conducted online with multiple-choice and programming tasks.",
    },
    Rule {
        topic: "Exam date",
        trigger: Trigger::Any(&["exam date"]),
        reply: "Your exam date is available in the Exam Schedule section.",
    },
    Rule {
        topic: "Study tips",
        trigger: Trigger::Any(&["study tips", "how to study"]),
        reply: "Follow a daily study plan, practice coding, and revise previous lessons.",
    },
    Rule {
        topic: "Career guidance",
        trigger: Trigger::Any(&["career", "future"]),
        reply: "Based on your skills, careers like Data Analyst, Web Developer, or ML Engineer suit you.",
    },
    Rule {
        topic: "Machine learning",
        trigger: Trigger::Any(&["machine learning"]),
        reply: "ML is about making computers learn from data. Start with Python and linear regression.",
    },
    Rule {
        topic: "Python help",
        trigger: Trigger::Any(&["python"]),
        reply: "Python is beginner-friendly. Start with variables, loops, functions, and file handling.",
    },
    Rule {
        topic: "Java help",
        trigger: Trigger::Any(&["java"]),
        reply: "Java is great for OOP and enterprise apps. Practice classes and objects daily.",
    },
    Rule {
        topic: "C programming help",
        trigger: Trigger::Any(&["c program", "c language"]),
        reply: "C language is great for logic building. Start with variables, loops, and arrays.",
    },
    Rule {
        topic: "C++ programming help",
        trigger: Trigger::Any(&["c++", "cpp"]),
        reply: "C++ is useful for competitive programming. Practice OOP concepts and STL.",
    },
    Rule {
        topic: "HTML help",
        trigger: Trigger::Any(&["html"]),
        reply: "HTML is the structure of web pages. Start with tags, forms, and basic layouts.",
    },
    Rule {
        topic: "CSS help",
        trigger: Trigger::Any(&["css"]),
        reply: "CSS controls styling. Learn selectors, flexbox, grid, and responsive design.",
    },
    Rule {
        topic: "JavaScript help",
        trigger: Trigger::Any(&["javascript", "js"]),
        reply: "JavaScript powers web interactivity. Begin with variables, events, and DOM.",
    },
    Rule {
        topic: "Data science info",
        trigger: Trigger::Any(&["data science"]),
        reply: "Data Science combines statistics and programming. Start with Python and pandas.",
    },
    Rule {
        topic: "AI help",
        trigger: Trigger::Any(&["ai", "artificial intelligence"]),
        reply: "AI focuses on building intelligent systems. Learn Python, ML, and neural networks.",
    },
    Rule {
        topic: "Deep learning",
        trigger: Trigger::Any(&["deep learning"]),
        reply: "Deep learning uses neural networks for AI. Begin with TensorFlow or PyTorch.",
    },
    Rule {
        topic: "Database help",
        trigger: Trigger::Any(&["database", "sql"]),
        reply: "SQL manages data. Learn SELECT, INSERT, UPDATE, DELETE, and JOIN queries.",
    },
    Rule {
        topic: "MySQL help",
        trigger: Trigger::Any(&["mysql"]),
        reply: "MySQL is a relational database. Practice table creation and CRUD operations.",
    },
    Rule {
        topic: "SQLite help",
        trigger: Trigger::Any(&["sqlite"]),
        reply: "SQLite is lightweight and perfect for local apps. No server installation needed.",
    },
    Rule {
        topic: "Flask help",
        trigger: Trigger::Any(&["flask"]),
        reply: "Flask is a Python web framework. Learn routing, templates, and forms.",
    },
    Rule {
        topic: "Django help",
        trigger: Trigger::Any(&["django"]),
        reply: "Django is a powerful backend framework. Start with models, views, and templates.",
    },
    Rule {
        topic: "API meaning",
        trigger: Trigger::Any(&["api"]),
        reply: "API allows systems to communicate. Learn GET, POST, PUT, DELETE methods.",
    },
    Rule {
        topic: "Debugging help",
        trigger: Trigger::Any(&["debug", "error"]),
        reply: "Debugging involves checking code line by line. Review errors carefully.",
    },
    Rule {
        topic: "IDE recommendation",
        trigger: Trigger::Any(&["ide", "editor"]),
        reply: "VS Code is recommended. It's lightweight and supports many languages.",
    },
    Rule {
        topic: "Learning path",
        trigger: Trigger::Any(&["learning path", "roadmap"]),
        reply: "Start slow, follow a roadmap, practice daily, and build mini projects.",
    },
    Rule {
        topic: "Time management",
        trigger: Trigger::Any(&["time management"]),
        reply: "Use a study schedule and break tasks into smaller pieces.",
    },
    Rule {
        topic: "Stress",
        trigger: Trigger::Any(&["stress", "tired"]),
        reply: "Take breaks, sleep well, and study in sessions to avoid burnout.",
    },
    Rule {
        topic: "Motivation",
        trigger: Trigger::Any(&["motivate", "motivation"]),
        reply: "Stay consistent. Small daily learning leads to big success!",
    },
    Rule {
        topic: "Online class link",
        trigger: Trigger::Any(&["class link"]),
        reply: "Your class link is available on the student dashboard.",
    },
    Rule {
        topic: "Marks",
        trigger: Trigger::Any(&["marks", "score"]),
        reply: "Your marks are updated after evaluation. Check the results section.",
    },
    Rule {
        topic: "Low marks",
        trigger: Trigger::Any(&["low marks", "bad score"]),
        reply: "Don't worry. Review mistakes and practice similar questions.",
    },
    Rule {
        topic: "High marks",
        trigger: Trigger::Any(&["high marks", "good score"]),
        reply: "Great job! Keep performing consistently.",
    },
    Rule {
        topic: "Performance warning",
        trigger: Trigger::Any(&["warning"]),
        reply: "Your performance needs attention. Focus on assignments and attendance.",
    },
    Rule {
        topic: "Password change",
        trigger: Trigger::Any(&["change password"]),
        reply: "Go to settings and update your password in the security section.",
    },
    Rule {
        topic: "Email issue",
        trigger: Trigger::All(&["email", "issue"]),
        reply: "Check your spam folder, and ensure you entered the correct email.",
    },
    Rule {
        topic: "Contact admin",
        trigger: Trigger::Any(&["contact admin"]),
        reply: "You can reach admin through the Contact Admin page.",
    },
    Rule {
        topic: "Profile update",
        trigger: Trigger::Any(&["update profile", "edit profile"]),
        reply: "You can edit your profile details under the Profile Settings page.",
    },
    Rule {
        topic: "Mobile app",
        trigger: Trigger::Any(&["app", "mobile"]),
        reply: "Our mobile app is in development and will be released soon.",
    },
    Rule {
        topic: "Course completion",
        trigger: Trigger::Any(&["complete course", "course completed"]),
        reply: "Once you complete a course, your certificate will be generated automatically.",
    },
    Rule {
        topic: "Certificate download",
        trigger: Trigger::Any(&["download certificate", "certificate"]),
        reply: "You can download your certificate from the Certificates section in your dashboard.",
    },
    Rule {
        topic: "Course progress",
        trigger: Trigger::Any(&["progress"]),
        reply: "Your course progress is updated daily. Check the progress bar for details.",
    },
    Rule {
        topic: "Extra classes",
        trigger: Trigger::Any(&["extra class", "special class"]),
        reply: "Extra classes are scheduled for students who need additional support.",
    },
    Rule {
        topic: "Doubt session",
        trigger: Trigger::Any(&["doubt", "help session"]),
        reply: "Doubt-clearing sessions happen every Friday.",
    },
    Rule {
        topic: "Holidays information",
        trigger: Trigger::Any(&["holiday", "vacation"]),
        reply: "The holiday list is available in your dashboard.",
    },
    Rule {
        topic: "Fees",
        trigger: Trigger::Any(&["fee", "fees"]),
        reply: "Fees vary by course. Check the Fees section for course-wise charges.",
    },
    Rule {
        topic: "Refund policy",
        trigger: Trigger::Any(&["refund"]),
        reply: "Refunds are available only within the first 3 days of enrollment.",
    },
    Rule {
        topic: "Payment methods",
        trigger: Trigger::Any(&["payment", "pay"]),
        reply: "We accept UPI, net banking, debit/credit cards, and wallets.",
    },
    Rule {
        topic: "Installment option",
        trigger: Trigger::Any(&["installment"]),
        reply: "Installment options are available for selected long-term courses.",
    },
    Rule {
        topic: "Classroom rules",
        trigger: Trigger::Any(&["rules"]),
        reply: "Maintain discipline, attend regularly, and submit assignments on time.",
    },
    Rule {
        topic: "Study hours",
        trigger: Trigger::Any(&["study hours"]),
        reply: "Study at least 1–2 hours daily for consistent improvement.",
    },
    Rule {
        topic: "Group study",
        trigger: Trigger::Any(&["group study"]),
        reply: "Group study can help, but ensure you focus on your weak areas.",
    },
    Rule {
        topic: "Self-study",
        trigger: Trigger::Any(&["self study"]),
        reply: "Self-study strengthens your understanding. Set a fixed schedule.",
    },
    Rule {
        topic: "Internet issues",
        trigger: Trigger::Any(&["internet", "wifi"]),
        reply: "Please ensure a stable internet connection for smooth learning.",
    },
    Rule {
        topic: "Laptop requirements",
        trigger: Trigger::Any(&["laptop", "system"]),
        reply: "A basic laptop with 4–8GB RAM is enough for most courses.",
    },
    Rule {
        topic: "Phone usage",
        trigger: Trigger::Any(&["phone", "mobile"]),
        reply: "You can attend classes on mobile, but coding works best on a laptop.",
    },
    Rule {
        topic: "Slow performance",
        trigger: Trigger::Any(&["slow", "lag"]),
        reply: "Restart your system and close unnecessary apps for better performance.",
    },
    Rule {
        topic: "Update browser",
        trigger: Trigger::Any(&["browser"]),
        reply: "Please use the latest version of Chrome, Edge, or Firefox.",
    },
    Rule {
        topic: "Video not playing",
        trigger: Trigger::Any(&["video", "class video"]),
        reply: "Try refreshing the page or checking your internet speed.",
    },
    Rule {
        topic: "Audio issue",
        trigger: Trigger::Any(&["audio", "sound"]),
        reply: "Ensure your speakers or headphones are properly connected.",
    },
    Rule {
        topic: "Camera issue",
        trigger: Trigger::Any(&["camera", "webcam"]),
        reply: "Give your browser permission to access the camera.",
    },
    Rule {
        topic: "Microphone issue",
        trigger: Trigger::Any(&["mic", "microphone"]),
        reply: "Allow microphone access and check sound settings.",
    },
    Rule {
        topic: "Attendance correction",
        trigger: Trigger::Any(&["correct attendance"]),
        reply: "Contact your instructor for manual attendance correction.",
    },
    Rule {
        topic: "Wrong marks",
        trigger: Trigger::Any(&["wrong marks", "marks mistake"]),
        reply: "Report the issue to your instructor or admin for correction.",
    },
    Rule {
        topic: "Reset progress",
        trigger: Trigger::Any(&["reset progress"]),
        reply: "Progress can only be reset manually by an admin.",
    },
    Rule {
        topic: "New courses",
        trigger: Trigger::Any(&["new course"]),
        reply: "New courses are added every month. Check the Updates section.",
    },
    Rule {
        topic: "Course difficulty",
        trigger: Trigger::Any(&["difficulty", "hard"]),
        reply: "Start with basics and practice regularly. Ask for help if needed.",
    },
    Rule {
        topic: "Easy subjects",
        trigger: Trigger::Any(&["easy subject"]),
        reply: "HTML, CSS, and Python basics are great choices for beginners.",
    },
    Rule {
        topic: "Hard subjects",
        trigger: Trigger::Any(&["hard subject"]),
        reply: "Subjects like AI, ML, and Data Science need consistent practice.",
    },
    Rule {
        topic: "Revision advice",
        trigger: Trigger::Any(&["revision", "revise"]),
        reply: "Revise your notes every weekend to strengthen your understanding.",
    },
    Rule {
        topic: "Daily schedule",
        trigger: Trigger::Any(&["daily schedule", "routine"]),
        reply: "Follow a routine: 1 hour study + 30 minutes practice + 10 minutes review.",
    },
    Rule {
        topic: "Breaks",
        trigger: Trigger::Any(&["break", "rest"]),
        reply: "Take short breaks every 45 minutes to improve focus.",
    },
    Rule {
        topic: "Memory improvement",
        trigger: Trigger::Any(&["memory", "remember"]),
        reply: "Write short notes and revise them regularly to improve memory.",
    },
    Rule {
        topic: "Performance alerts",
        trigger: Trigger::Any(&["alert"]),
        reply: "Alerts notify students about attendance drops or low performance.",
    },
    Rule {
        topic: "Attendance report",
        trigger: Trigger::Any(&["attendance report"]),
        reply: "Your attendance report is available in the Attendance section.",
    },
    Rule {
        topic: "Performance report",
        trigger: Trigger::Any(&["performance report"]),
        reply: "Your performance report shows subject-wise strengths and weaknesses.",
    },
    Rule {
        topic: "Subject weakness",
        trigger: Trigger::Any(&["weak"]),
        reply: "Identify weak subjects and practice them more frequently.",
    },
    Rule {
        topic: "Subject strength",
        trigger: Trigger::Any(&["strong"]),
        reply: "Great! Use your strong subjects to boost overall performance.",
    },
    Rule {
        topic: "Internet speed",
        trigger: Trigger::Any(&["speed"]),
        reply: "A minimum of 5 Mbps internet speed is recommended.",
    },
    Rule {
        topic: "Quiz help",
        trigger: Trigger::Any(&["quiz"]),
        reply: "Quizzes help test your knowledge. Attempt them regularly.",
    },
    Rule {
        topic: "Test preparation",
        trigger: Trigger::Any(&["prepare", "preparation"]),
        reply: "Start preparing early. Revise notes and solve past questions.",
    },
    Rule {
        topic: "Exam results",
        trigger: Trigger::Any(&["result"]),
        reply: "Results are updated once evaluations are complete.",
    },
    Rule {
        topic: "Skills recommendation",
        trigger: Trigger::Any(&["skills"]),
        reply: "Improve your skills by practicing coding, reading PDFs, and watching lectures.",
    },
    Rule {
        topic: "Internship eligibility",
        trigger: Trigger::Any(&["eligible for internship"]),
        reply: "You become eligible for internships after completing 70% of your course.",
    },
    Rule {
        topic: "Job placement",
        trigger: Trigger::Any(&["job", "placement"]),
        reply: "We offer placement guidance and resume-building support.",
    },
    Rule {
        topic: "Resume help",
        trigger: Trigger::Any(&["resume", "cv"]),
        reply: "Upload your resume in the Resume Builder section for feedback.",
    },
    Rule {
        topic: "Portfolio tips",
        trigger: Trigger::Any(&["portfolio"]),
        reply: "Create a portfolio with your best projects to impress recruiters.",
    },
    Rule {
        topic: "Project ideas",
        trigger: Trigger::Any(&["project idea"]),
        reply: "Try building a weather app, chatbot, attendance system, or portfolio website.",
    },
    Rule {
        topic: "Coding practice",
        trigger: Trigger::Any(&["coding", "code"]),
        reply: "Practice coding daily to improve your problem-solving skills.",
    },
    Rule {
        topic: "Practice websites",
        trigger: Trigger::Any(&["practice website"]),
        reply: "You can practice coding on HackerRank, CodeChef, and LeetCode.",
    },
    Rule {
        topic: "Lab timing",
        trigger: Trigger::Any(&["lab timing"]),
        reply: "Labs are available 24/7 for students to practice.",
    },
    Rule {
        topic: "Attendance reminder",
        trigger: Trigger::Any(&["remind", "reminder"]),
        reply: "We send reminders when your attendance drops below 80%.",
    },
    Rule {
        topic: "Leave application",
        trigger: Trigger::Any(&["leave"]),
        reply: "Submit your leave request through the Leave Application section.",
    },
    Rule {
        topic: "Class recording",
        trigger: Trigger::Any(&["recording", "recorded class"]),
        reply: "Class recordings are uploaded within 24 hours.",
    },
    Rule {
        topic: "Batch change",
        trigger: Trigger::Any(&["batch change", "change batch"]),
        reply: "You can request a batch change once per course.",
    },
    Rule {
        topic: "Course upgrade",
        trigger: Trigger::Any(&["upgrade course"]),
        reply: "You can upgrade your course from the Payments section.",
    },
    Rule {
        topic: "Course downgrade",
        trigger: Trigger::Any(&["downgrade"]),
        reply: "Course downgrades require admin approval.",
    },
    Rule {
        topic: "Contact teacher",
        trigger: Trigger::Any(&["contact teacher", "message teacher"]),
        reply: "Use the Messages section to contact your teacher.",
    },
    Rule {
        topic: "Contact support",
        trigger: Trigger::Any(&["support"]),
        reply: "Our support team is available 9AM–9PM daily for assistance.",
    },
    Rule {
        topic: "Technical support",
        trigger: Trigger::Any(&["technical issue", "tech problem"]),
        reply: "Please describe your technical issue. I’ll guide you through the solution.",
    },
    Rule {
        topic: "Forgot username",
        trigger: Trigger::Any(&["forgot username"]),
        reply: "Contact support to retrieve your username.",
    },
    Rule {
        topic: "Reset email",
        trigger: Trigger::Any(&["change email", "update email"]),
        reply: "You can update your email in the Profile Settings.",
    },
    Rule {
        topic: "Wrong email",
        trigger: Trigger::Any(&["wrong email"]),
        reply: "Please enter the correct email or contact support for correction.",
    },
    Rule {
        topic: "Profile photo",
        trigger: Trigger::Any(&["profile picture", "photo"]),
        reply: "Upload your profile picture in the Profile section.",
    },
    Rule {
        topic: "Notification settings",
        trigger: Trigger::Any(&["notifications"]),
        reply: "You can enable or disable notifications in Settings.",
    },
    Rule {
        topic: "Email verification",
        trigger: Trigger::Any(&["verify email"]),
        reply: "A verification link has been sent to your email. Please check your inbox.",
    },
    Rule {
        topic: "Account locked",
        trigger: Trigger::Any(&["account locked"]),
        reply: "Your account was locked due to multiple failed attempts. Contact support to unlock.",
    },
    Rule {
        topic: "Two-factor authentication",
        trigger: Trigger::Any(&["2fa", "two factor"]),
        reply: "Two-factor authentication adds extra security to your account.",
    },
    Rule {
        topic: "Update password",
        trigger: Trigger::Any(&["update password"]),
        reply: "Go to security settings and update your password safely.",
    },
    Rule {
        topic: "Marks improvement tips",
        trigger: Trigger::Any(&["improve marks"]),
        reply: "Practice past papers and revise weekly to improve marks.",
    },
    Rule {
        topic: "Weak attendance",
        trigger: Trigger::Any(&["weak attendance"]),
        reply: "Attend upcoming classes regularly to improve your attendance.",
    },
    Rule {
        topic: "Performance analytics",
        trigger: Trigger::Any(&["analytics"]),
        reply: "Performance analytics show your progress, accuracy, and learning trends.",
    },
    Rule {
        topic: "Course recommendation",
        trigger: Trigger::Any(&["which course"]),
        reply: "I recommend Data Science or Web Development based on current student trends.",
    },
    Rule {
        topic: "Beginner course",
        trigger: Trigger::Any(&["beginner"]),
        reply: "Start with Python basics, HTML, CSS, and simple projects.",
    },
    Rule {
        topic: "Advanced course",
        trigger: Trigger::Any(&["advanced"]),
        reply: "For advanced learning, try AI, ML, and full-stack development.",
    },
    Rule {
        topic: "Chatbot help",
        trigger: Trigger::Any(&["chatbot"]),
        reply: "Our chatbot helps with academic queries, performance updates, and general support.",
    },
    Rule {
        topic: "Server issue",
        trigger: Trigger::Any(&["server"]),
        reply: "The server may be updating. Please try again after a few minutes.",
    },
    Rule {
        topic: "Page not loading",
        trigger: Trigger::Any(&["page not load", "page not opening"]),
        reply: "Refresh the page or clear your browser cache.",
    },
    Rule {
        topic: "App crashing",
        trigger: Trigger::Any(&["crash"]),
        reply: "Restart the app and check for updates.",
    },
    Rule {
        topic: "Update app",
        trigger: Trigger::Any(&["update app"]),
        reply: "Updates improve performance. Please install the latest app version.",
    },
    Rule {
        topic: "Video quality",
        trigger: Trigger::Any(&["quality", "blurry"]),
        reply: "Adjust the video quality settings or check your internet speed.",
    },
    Rule {
        topic: "Exam rules",
        trigger: Trigger::Any(&["exam rules"]),
        reply: "Follow exam rules: no cheating, camera on, and stable internet.",
    },
    Rule {
        topic: "Exam time",
        trigger: Trigger::Any(&["exam time"]),
        reply: "Exam times vary for each subject. Refer to the exam schedule.",
    },
    Rule {
        topic: "Assignment deadline",
        trigger: Trigger::Any(&["deadline"]),
        reply: "Assignment deadlines are shown in the Assignments tab.",
    },
    Rule {
        topic: "Submission failed",
        trigger: Trigger::Any(&["submission failed", "cannot submit"]),
        reply: "Try uploading the file again or reduce its size.",
    },
    Rule {
        topic: "File size limit",
        trigger: Trigger::Any(&["file size"]),
        reply: "The maximum file size allowed is 10MB.",
    },
    Rule {
        topic: "Plagiarism",
        trigger: Trigger::Any(&["plagiarism", "copy"]),
        reply: "Please submit original work. Plagiarism can reduce your marks.",
    },
    Rule {
        topic: "Project submission",
        trigger: Trigger::Any(&["project submit"]),
        reply: "Submit your project in the Projects section before the deadline.",
    },
    Rule {
        topic: "Project feedback",
        trigger: Trigger::Any(&["project feedback"]),
        reply: "Project feedback will be available within 3–5 days after submission.",
    },
    Rule {
        topic: "Teacher feedback",
        trigger: Trigger::Any(&["teacher feedback"]),
        reply: "Teacher feedback helps you understand your strengths and weaknesses.",
    },
    Rule {
        topic: "Re-evaluation",
        trigger: Trigger::Any(&["recheck", "reevaluate"]),
        reply: "You can request re-evaluation through the Marks section.",
    },
    Rule {
        topic: "Unit test schedule",
        trigger: Trigger::Any(&["unit test"]),
        reply: "Unit test dates are available in the Exam Schedule section.",
    },
    Rule {
        topic: "Study strategy",
        trigger: Trigger::Any(&["strategy", "plan"]),
        reply: "Use the 50-10 study rule: 50 minutes study, 10 minutes break.",
    },
    Rule {
        topic: "Class timings change",
        trigger: Trigger::Any(&["change timing", "class time change"]),
        reply: "Timing changes require approval from your instructor.",
    },
    Rule {
        topic: "New announcement",
        trigger: Trigger::Any(&["announcement"]),
        reply: "New announcements are posted on your student dashboard.",
    },
    Rule {
        topic: "Update profile photo",
        trigger: Trigger::Any(&["change photo"]),
        reply: "Go to profile settings and upload a new picture.",
    },
    Rule {
        topic: "Course language",
        trigger: Trigger::Any(&["language"]),
        reply: "Courses are available in English and will support more languages soon.",
    },
    Rule {
        topic: "Online exam",
        trigger: Trigger::Any(&["online exam"]),
        reply: "Online exams require a stable internet connection and camera access.",
    },
    Rule {
        topic: "Exam instructions",
        trigger: Trigger::Any(&["instructions"]),
        reply: "Read exam instructions carefully before starting.",
    },
    Rule {
        topic: "Attendance marking time",
        trigger: Trigger::Any(&["mark attendance"]),
        reply: "Attendance is marked automatically when you join class.",
    },
    Rule {
        topic: "Exam syllabus",
        trigger: Trigger::Any(&["syllabus"]),
        reply: "Your syllabus is available in the Subjects section.",
    },
    Rule {
        topic: "Python projects",
        trigger: Trigger::Any(&["python project"]),
        reply: "Try building a calculator, chatbot, or student management system.",
    },
    Rule {
        topic: "Web development projects",
        trigger: Trigger::Any(&["web project", "website project"]),
        reply: "Try creating a portfolio website, login system, or gallery page.",
    },
    Rule {
        topic: "Data science projects",
        trigger: Trigger::Any(&["data science project"]),
        reply: "Start with simple projects like Titanic survival prediction or sales forecasting.",
    },
    Rule {
        topic: "Internship certificate",
        trigger: Trigger::Any(&["internship certificate"]),
        reply: "Internship certificates are provided after successful completion.",
    },
    Rule {
        topic: "Attendance improvement tips",
        trigger: Trigger::Any(&["attendance improve"]),
        reply: "Attend regularly and avoid missing continuous classes.",
    },
    Rule {
        topic: "Study hours suggestion",
        trigger: Trigger::Any(&["how many hours"]),
        reply: "Study at least 1–2 hours daily for best results.",
    },
    Rule {
        topic: "Eligibility",
        trigger: Trigger::Any(&["eligible"]),
        reply: "Eligibility depends on your attendance and academic performance.",
    },
    Rule {
        topic: "Project partner",
        trigger: Trigger::Any(&["partner", "group project"]),
        reply: "You may choose a partner for group projects with teacher approval.",
    },
    Rule {
        topic: "Extra credit",
        trigger: Trigger::Any(&["extra credit"]),
        reply: "Extra credit is awarded for active participation and project excellence.",
    },
    Rule {
        topic: "Missing files",
        trigger: Trigger::Any(&["file missing"]),
        reply: "Try re-uploading the file. If the issue continues, contact support.",
    },
    Rule {
        topic: "Update marks",
        trigger: Trigger::Any(&["update marks", "change marks"]),
        reply: "Marks can only be updated by the instructor.",
    },
    Rule {
        topic: "Wrong question",
        trigger: Trigger::Any(&["wrong question"]),
        reply: "Report the wrong question to your instructor immediately.",
    },
    Rule {
        topic: "Upload photo",
        trigger: Trigger::Any(&["upload photo"]),
        reply: "Use the Upload section to add your photo.",
    },
    Rule {
        topic: "Notifications on",
        trigger: Trigger::Any(&["turn on notifications"]),
        reply: "Enable notifications in Settings > Notifications.",
    },
    Rule {
        topic: "Notifications off",
        trigger: Trigger::Any(&["turn off notifications"]),
        reply: "Disable notifications in Settings > Notifications.",
    },
    Rule {
        topic: "Dashboard error",
        trigger: Trigger::Any(&["dashboard error"]),
        reply: "Please refresh the dashboard or clear your browser cache.",
    },
    Rule {
        topic: "Password strength",
        trigger: Trigger::Any(&["strong password"]),
        reply: "Use at least 8 characters with a mix of letters, numbers, and symbols.",
    },
    Rule {
        topic: "File format",
        trigger: Trigger::Any(&["file format"]),
        reply: "Upload files in PDF, JPG, PNG, or DOCX format.",
    },
    Rule {
        topic: "Class attendance time",
        trigger: Trigger::Any(&["when attendance"]),
        reply: "Attendance is marked within the first 10 minutes of class.",
    },
    Rule {
        topic: "Device support",
        trigger: Trigger::Any(&["device"]),
        reply: "You can use mobile, laptop, or tablet for online classes.",
    },
    Rule {
        topic: "Reset settings",
        trigger: Trigger::Any(&["reset settings"]),
        reply: "You can reset settings from the Profile > Reset Settings option.",
    },
    Rule {
        topic: "Join meeting",
        trigger: Trigger::Any(&["join meeting", "join class"]),
        reply: "Use the Join Class button available on your dashboard.",
    },
    Rule {
        topic: "Change subject",
        trigger: Trigger::Any(&["change subject"]),
        reply: "Subject changes require approval from your coordinator.",
    },
    Rule {
        topic: "Add subject",
        trigger: Trigger::Any(&["add subject"]),
        reply: "You can add subjects from the Course Enrollment section.",
    },
    Rule {
        topic: "Remove subject",
        trigger: Trigger::Any(&["remove subject"]),
        reply: "Contact admin to remove the subject from your list.",
    },
    Rule {
        topic: "Performance graph",
        trigger: Trigger::Any(&["graph", "chart"]),
        reply: "Your performance graph is updated after every test.",
    },
    Rule {
        topic: "Monthly report",
        trigger: Trigger::Any(&["monthly report"]),
        reply: "Monthly performance reports are generated automatically.",
    },
    Rule {
        topic: "Study reminders",
        trigger: Trigger::Any(&["study reminder"]),
        reply: "Study reminders help you stay consistent. Enable them in Settings.",
    },
    Rule {
        topic: "AI recommendations",
        trigger: Trigger::Any(&["ai recommend"]),
        reply: "AI recommendations are based on your performance, attendance, and activity.",
    },
    Rule {
        topic: "Data update",
        trigger: Trigger::Any(&["update data"]),
        reply: "Your data is updated after each class, test, or activity by the system.",
    },
    Rule {
        topic: "Server maintenance",
        trigger: Trigger::Any(&["maintenance"]),
        reply: "The server is under maintenance. Please try again later.",
    },
    Rule {
        topic: "Logout help",
        trigger: Trigger::Any(&["how to logout"]),
        reply: "Click the Logout button in the top-right corner of the dashboard.",
    },
    Rule {
        topic: "Improve coding",
        trigger: Trigger::Any(&["improve coding"]),
        reply: "Practice coding daily, solve small problems, and try building mini projects.",
    },
    Rule {
        topic: "Study motivation",
        trigger: Trigger::Any(&["no motivation"]),
        reply: "It's normal to feel low. Take a break and restart with small tasks.",
    },
    Rule {
        topic: "Weak network",
        trigger: Trigger::Any(&["weak network"]),
        reply: "Try switching networks or moving closer to your Wi-Fi router.",
    },
    Rule {
        topic: "Exam preparation tips",
        trigger: Trigger::Any(&["exam tips"]),
        reply: "Revise notes, practice previous exams, and avoid last-minute cramming.",
    },
    Rule {
        topic: "Course switching",
        trigger: Trigger::Any(&["switch course"]),
        reply: "Course switching is allowed within the first 7 days of enrollment.",
    },
    Rule {
        topic: "Unknown query fallback",
        trigger: Trigger::Any(&["help", "question"]),
        reply: "I’m here to assist you. Please ask your question clearly.",
    },
];
